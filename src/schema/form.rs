//! Form schema validation.
//!
//! This module provides [`FormSchema`], which maps field names to field
//! schemas and validates whole form snapshots in a single pass.

use indexmap::IndexMap;
use stillwater::Validation;

use crate::error::{FieldError, FieldErrors};
use crate::values::FormValues;

use super::traits::FieldSchema;

/// A schema for validating a complete form snapshot.
///
/// Every field's every constraint is evaluated against the snapshot; a
/// failure in one field never stops the others from being checked. Errors
/// are reported in field declaration order, then constraint order.
///
/// Fields present in the snapshot but not declared here are not validated.
/// The schema is built once and validated against many snapshots; it holds
/// no per-pass state.
///
/// # Example
///
/// ```rust
/// use gobarber_forms::{FormValues, Schema};
///
/// let schema = Schema::form()
///     .field("email", Schema::string().required().email())
///     .field("password", Schema::string().required());
///
/// let result = schema.validate(&FormValues::new()
///     .with("email", "ana@gobarber.com")
///     .with("password", "123456"));
/// assert!(result.is_success());
///
/// let result = schema.validate(&FormValues::new());
/// assert!(result.is_failure());
/// ```
pub struct FormSchema {
    fields: IndexMap<String, Box<dyn FieldSchema>>,
}

impl FormSchema {
    /// Creates a new form schema with no fields.
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Adds a field to the schema.
    ///
    /// Declaring the same field twice replaces the earlier schema but keeps
    /// its original position.
    pub fn field<S>(mut self, name: impl Into<String>, schema: S) -> Self
    where
        S: FieldSchema + 'static,
    {
        self.fields.insert(name.into(), Box::new(schema));
        self
    }

    /// Returns the declared field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns true if `name` is declared in this schema.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Returns the number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validates a snapshot against this schema.
    ///
    /// Returns `Validation::Success` with a copy of the snapshot if every
    /// constraint passes, or `Validation::Failure` with all accumulated
    /// errors otherwise.
    pub fn validate(&self, values: &FormValues) -> Validation<FormValues, FieldErrors> {
        let errors: Vec<FieldError> = self
            .fields
            .iter()
            .flat_map(|(name, schema)| match schema.validate_field(name, values.get(name)) {
                Validation::Success(_) => Vec::new(),
                Validation::Failure(e) => e.into_vec(),
            })
            .collect();

        tracing::debug!(
            fields = self.fields.len(),
            errors = errors.len(),
            "form validation pass"
        );

        match FieldErrors::from_vec(errors) {
            Some(errors) => Validation::Failure(errors),
            None => Validation::Success(values.clone()),
        }
    }
}

impl Default for FormSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FormSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormSchema")
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}
