//! Submission adapters: turn a validated snapshot into an API call.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::api::{ApiError, Authenticator, Credentials, NewUser, Session, UserDirectory};
use crate::forms::{EMAIL, NAME, PASSWORD};
use crate::values::FormValues;

/// The remote action a screen performs once its form is valid.
#[async_trait]
pub trait Submission: Send + Sync {
    /// Sends the validated snapshot. Only success or failure matters to the
    /// screen.
    async fn submit(&self, values: &FormValues) -> Result<(), ApiError>;
}

/// Keeps the session opened by a successful sign-in.
pub trait SessionStore: Send + Sync {
    fn store(&self, session: Session);
}

impl<T: SessionStore + ?Sized> SessionStore for Arc<T> {
    fn store(&self, session: Session) {
        (**self).store(session)
    }
}

/// In-memory [`SessionStore`] holding the latest session.
#[derive(Debug, Default)]
pub struct SessionSlot {
    session: RwLock<Option<Session>>,
}

impl SessionSlot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the stored session, if any.
    pub fn get(&self) -> Option<Session> {
        self.session.read().clone()
    }

    /// Returns the stored token, if any.
    pub fn token(&self) -> Option<String> {
        self.session.read().as_ref().map(|s| s.token.clone())
    }

    /// Drops the stored session.
    pub fn clear(&self) {
        *self.session.write() = None;
    }
}

impl SessionStore for SessionSlot {
    fn store(&self, session: Session) {
        *self.session.write() = Some(session);
    }
}

/// Signs a user in with the `email` and `password` fields and hands the
/// session to a [`SessionStore`].
#[derive(Debug, Clone)]
pub struct SignInSubmission<A, K> {
    auth: A,
    sessions: K,
}

impl<A: Authenticator, K: SessionStore> SignInSubmission<A, K> {
    /// Creates a submission that signs in through `auth` and stores the
    /// opened session in `sessions`.
    pub fn new(auth: A, sessions: K) -> Self {
        Self { auth, sessions }
    }

    /// Builds the sign-in credentials from a snapshot.
    pub fn credentials(values: &FormValues) -> Credentials {
        Credentials {
            email: values.get_or_empty(EMAIL).to_string(),
            password: values.get_or_empty(PASSWORD).to_string(),
        }
    }

    /// Signs in and returns the session.
    pub async fn sign_in(&self, values: &FormValues) -> Result<Session, ApiError> {
        self.auth.sign_in(&Self::credentials(values)).await
    }
}

#[async_trait]
impl<A: Authenticator, K: SessionStore> Submission for SignInSubmission<A, K> {
    async fn submit(&self, values: &FormValues) -> Result<(), ApiError> {
        let session = self.sign_in(values).await?;
        tracing::info!(
            has_user = !session.user.is_null(),
            "session opened"
        );
        self.sessions.store(session);
        Ok(())
    }
}

/// Registers a user with the `name`, `email` and `password` fields.
#[derive(Debug, Clone)]
pub struct SignUpSubmission<U> {
    users: U,
}

impl<U: UserDirectory> SignUpSubmission<U> {
    /// Creates a submission that registers users through `users`.
    pub fn new(users: U) -> Self {
        Self { users }
    }

    /// Builds the `POST /users` body from a snapshot.
    pub fn new_user(values: &FormValues) -> NewUser {
        NewUser {
            name: values.get_or_empty(NAME).to_string(),
            email: values.get_or_empty(EMAIL).to_string(),
            password: values.get_or_empty(PASSWORD).to_string(),
        }
    }
}

#[async_trait]
impl<U: UserDirectory> Submission for SignUpSubmission<U> {
    async fn submit(&self, values: &FormValues) -> Result<(), ApiError> {
        self.users.create_user(&Self::new_user(values)).await
    }
}

#[async_trait]
impl<T: Submission + ?Sized> Submission for Arc<T> {
    async fn submit(&self, values: &FormValues) -> Result<(), ApiError> {
        (**self).submit(values).await
    }
}
