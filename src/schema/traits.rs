//! Traits for field schema polymorphism.
//!
//! This module provides the [`FieldSchema`] trait that lets a [`FormSchema`]
//! hold different kinds of per-field validators side by side.
//!
//! [`FormSchema`]: super::FormSchema

use stillwater::Validation;

use crate::error::FieldErrors;

/// A validator for a single form field.
///
/// `FieldSchema` is the seam between a form schema and the rules of each of
/// its fields. [`StringSchema`](super::StringSchema) is the built-in
/// implementation; custom rules can implement the trait directly and be
/// registered with [`FormSchema::field`](super::FormSchema::field).
///
/// The `Send + Sync` bounds allow a built schema to be shared across
/// threads behind an `Arc`, as the [`FormRegistry`](crate::FormRegistry)
/// does.
///
/// # Example
///
/// ```rust
/// use gobarber_forms::{FieldError, FieldErrors, FieldSchema, FormValues, Schema};
/// use stillwater::Validation;
///
/// struct NoSpaces;
///
/// impl FieldSchema for NoSpaces {
///     fn validate_field(
///         &self,
///         field: &str,
///         value: Option<&str>,
///     ) -> Validation<Option<String>, FieldErrors> {
///         match value {
///             Some(v) if v.contains(' ') => Validation::Failure(FieldErrors::single(
///                 FieldError::new(field, "sem espaços").with_code("no_spaces"),
///             )),
///             other => Validation::Success(other.map(str::to_string)),
///         }
///     }
/// }
///
/// let form = Schema::form().field("login", NoSpaces);
/// let result = form.validate(&FormValues::new().with("login", "ana maria"));
/// assert!(result.is_failure());
/// ```
pub trait FieldSchema: Send + Sync {
    /// Validates the value of `field`, which is `None` when the snapshot has
    /// no entry for it.
    ///
    /// Returns `Validation::Success` with the (possibly absent) value, or
    /// `Validation::Failure` with every violated constraint.
    fn validate_field(
        &self,
        field: &str,
        value: Option<&str>,
    ) -> Validation<Option<String>, FieldErrors>;
}
