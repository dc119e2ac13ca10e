//! The validate-then-submit driver behind each form screen.

use std::sync::Arc;

use crate::api::{Authenticator, UserDirectory};
use crate::schema::FormSchema;
use crate::values::FormValues;

use super::state::{FormPhase, FormState};
use super::submission::{SessionStore, SignInSubmission, SignUpSubmission, Submission};
use super::ui::{Navigator, Notifier, Toast, ToastKind};

/// What a screen shows and where it goes after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenConfig {
    /// Route to navigate to after a successful submission.
    pub success_route: String,
    /// Toast shown after a successful submission, if any.
    pub success_toast: Option<Toast>,
    /// Toast shown for any submission failure.
    pub failure_toast: Toast,
}

impl ScreenConfig {
    /// The sign-in screen: no success toast, land on the dashboard.
    pub fn sign_in() -> Self {
        Self {
            success_route: "/dashboard".to_string(),
            success_toast: None,
            failure_toast: Toast::new(ToastKind::Error, "Erro na Autenticação")
                .with_description("Ocorreu um erro ao fazer login, cheque as credenciais."),
        }
    }

    /// The sign-up screen: confirm the account and go back to logon.
    pub fn sign_up() -> Self {
        Self {
            success_route: "/".to_string(),
            success_toast: Some(
                Toast::new(ToastKind::Success, "Cadastro realizado!")
                    .with_description("Você já pode fazer seu logon no GoBarber!"),
            ),
            failure_toast: Toast::new(ToastKind::Error, "Erro no cadastro")
                .with_description("Ocorreu um erro ao fazer cadastro, tente novamente."),
        }
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid,
    /// The remote call succeeded.
    Submitted,
    /// The remote call failed; the user was notified.
    Failed,
}

/// A form screen: a pre-built schema, the state it owns, and the
/// collaborators it reports to.
///
/// Each method takes `&mut self`, so one screen runs one validation or
/// submission at a time and the latest pass always owns the error map.
pub struct FormScreen<S, N, R> {
    schema: Arc<FormSchema>,
    state: FormState,
    submission: S,
    notifier: N,
    navigator: R,
    config: ScreenConfig,
}

impl<S, N, R> FormScreen<S, N, R>
where
    S: Submission,
    N: Notifier,
    R: Navigator,
{
    /// Creates a screen for `schema`.
    ///
    /// Every field the schema declares starts out present and empty, the
    /// way a rendered form reports untouched inputs.
    pub fn new(
        schema: Arc<FormSchema>,
        submission: S,
        notifier: N,
        navigator: R,
        config: ScreenConfig,
    ) -> Self {
        let values: FormValues = schema.field_names().map(|name| (name, "")).collect();
        Self {
            schema,
            state: FormState::with_values(values),
            submission,
            notifier,
            navigator,
            config,
        }
    }

    /// Returns the screen's form state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Returns the schema this screen validates against.
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Records a field change and re-validates the whole form for live
    /// feedback. Never submits. Returns whether the form is currently valid.
    pub fn change(&mut self, field: impl Into<String>, value: impl Into<String>) -> bool {
        self.state.set_value(field, value);
        self.validate()
    }

    /// Runs one validation pass and settles back to idle.
    pub fn validate(&mut self) -> bool {
        let valid = self.state.validate(&self.schema);
        self.state.set_phase(FormPhase::Idle);
        valid
    }

    /// Validates, then submits if and only if that pass found no errors.
    ///
    /// On success the success toast (if any) is shown and the screen
    /// navigates away. On failure the error map is left as it is and the
    /// screen's generic failure toast is shown once, whatever the cause.
    /// There is no retry; the user submits again.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.state.validate(&self.schema) {
            tracing::debug!(
                errors = self.state.errors().len(),
                "submit blocked by validation errors"
            );
            self.state.set_phase(FormPhase::Idle);
            return SubmitOutcome::Invalid;
        }

        self.state.set_phase(FormPhase::Submitting);
        tracing::info!(route = %self.config.success_route, "submitting form");

        match self.submission.submit(self.state.values()).await {
            Ok(()) => {
                self.state.set_phase(FormPhase::Success);
                if let Some(toast) = &self.config.success_toast {
                    self.notifier.notify(toast.clone());
                }
                self.navigator.navigate(&self.config.success_route);
                SubmitOutcome::Submitted
            }
            Err(err) => {
                tracing::warn!(error = %err, "form submission failed");
                self.state.set_phase(FormPhase::Failure);
                self.notifier.notify(self.config.failure_toast.clone());
                self.state.set_phase(FormPhase::Idle);
                SubmitOutcome::Failed
            }
        }
    }
}

/// Builds the sign-in screen. A successful sign-in stores its session in
/// `sessions` before navigating.
pub fn sign_in_screen<A, K, N, R>(
    schema: Arc<FormSchema>,
    auth: A,
    sessions: K,
    notifier: N,
    navigator: R,
) -> FormScreen<SignInSubmission<A, K>, N, R>
where
    A: Authenticator,
    K: SessionStore,
    N: Notifier,
    R: Navigator,
{
    FormScreen::new(
        schema,
        SignInSubmission::new(auth, sessions),
        notifier,
        navigator,
        ScreenConfig::sign_in(),
    )
}

/// Builds the sign-up screen.
pub fn sign_up_screen<U, N, R>(
    schema: Arc<FormSchema>,
    users: U,
    notifier: N,
    navigator: R,
) -> FormScreen<SignUpSubmission<U>, N, R>
where
    U: UserDirectory,
    N: Notifier,
    R: Navigator,
{
    FormScreen::new(
        schema,
        SignUpSubmission::new(users),
        notifier,
        navigator,
        ScreenConfig::sign_up(),
    )
}
