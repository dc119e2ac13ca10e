//! Flattening of validation failures for display.
//!
//! A form shows at most one message next to each field. [`normalize`] turns
//! the ordered [`FieldErrors`] of a validation pass into an [`ErrorMap`]
//! holding one message per field.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::FieldErrors;

/// A field name to message mapping, ready to annotate a rendered form.
///
/// Field order is the order in which each field first failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap {
    messages: IndexMap<String, String>,
}

impl ErrorMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the message shown for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.messages.get(field).map(String::as_str)
    }

    /// Returns true if `field` has a message.
    pub fn contains(&self, field: &str) -> bool {
        self.messages.contains_key(field)
    }

    /// Returns the number of fields with a message.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if no field has a message.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns an iterator over `(field, message)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.messages.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Removes every message.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

/// Flattens validation failures into one message per field.
///
/// Failures are visited in order and each one overwrites the entry for its
/// field, so when a field violates several constraints the message of the
/// last violation is the one kept.
///
/// # Example
///
/// ```rust
/// use gobarber_forms::{normalize, FieldError, FieldErrors};
/// use stillwater::prelude::*;
///
/// let errors = FieldErrors::single(FieldError::new("password", "Senha obrigatória"))
///     .combine(FieldErrors::single(FieldError::new("password", "No mínimo 6 dígitos")));
///
/// let map = normalize(&errors);
/// assert_eq!(map.get("password"), Some("No mínimo 6 dígitos"));
/// assert_eq!(map.len(), 1);
/// ```
pub fn normalize(errors: &FieldErrors) -> ErrorMap {
    let mut map = ErrorMap::new();
    for error in errors {
        map.messages
            .insert(error.field.clone(), error.message.clone());
    }
    map
}

impl From<&FieldErrors> for ErrorMap {
    fn from(errors: &FieldErrors) -> Self {
        normalize(errors)
    }
}

impl From<FieldErrors> for ErrorMap {
    fn from(errors: FieldErrors) -> Self {
        normalize(&errors)
    }
}
