//! Per-screen form state.

use crate::normalize::{normalize, ErrorMap};
use crate::schema::FormSchema;
use crate::values::FormValues;
use stillwater::Validation;

/// Where a form currently is in its validate-then-submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormPhase {
    /// Waiting for input.
    #[default]
    Idle,
    /// A validation pass is running.
    Validating,
    /// The last pass failed; errors are on display.
    Invalid,
    /// The last pass succeeded.
    Valid,
    /// The remote call is in flight.
    Submitting,
    /// The remote call succeeded.
    Success,
    /// The remote call failed.
    Failure,
}

/// The state a form screen owns: the current snapshot, the errors on
/// display, and the phase.
///
/// Nothing here is global. The owning screen passes it by reference into
/// validation and submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: FormValues,
    errors: ErrorMap,
    phase: FormPhase,
}

impl FormState {
    /// Creates an empty, idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an idle state seeded with `values`.
    pub fn with_values(values: FormValues) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    /// Returns the current snapshot.
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Returns the errors on display.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Returns the current phase.
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Updates one field of the snapshot.
    pub fn set_value(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.set(field, value);
    }

    pub(crate) fn set_phase(&mut self, phase: FormPhase) {
        self.phase = phase;
    }

    /// Runs one validation pass of the current snapshot against `schema`.
    ///
    /// Errors from the previous pass are cleared first. On failure the
    /// normalized errors replace them and the phase becomes
    /// [`FormPhase::Invalid`]; on success the phase becomes
    /// [`FormPhase::Valid`]. Returns whether the pass succeeded.
    pub fn validate(&mut self, schema: &FormSchema) -> bool {
        self.errors.clear();
        self.phase = FormPhase::Validating;

        match schema.validate(&self.values) {
            Validation::Success(_) => {
                self.phase = FormPhase::Valid;
                true
            }
            Validation::Failure(errors) => {
                self.errors = normalize(&errors);
                self.phase = FormPhase::Invalid;
                false
            }
        }
    }
}
