//! Schema definitions for form validation.
//!
//! This module provides the schema types used to validate form snapshots.
//! Each schema accumulates all validation errors rather than stopping at the
//! first failure.
//!
//! # Example
//!
//! ```rust
//! use gobarber_forms::{FormValues, Schema};
//!
//! let schema = Schema::form()
//!     .field("name", Schema::string().required());
//!
//! let result = schema.validate(&FormValues::new().with("name", "Ana"));
//! assert!(result.is_success());
//! ```

mod form;
mod string;
mod traits;

pub use form::FormSchema;
pub use string::StringSchema;
pub use traits::FieldSchema;

/// Entry point for creating validation schemas.
///
/// `Schema` provides factory methods for the schema types. Each supports
/// constraints through a builder pattern.
///
/// # Example
///
/// ```rust
/// use gobarber_forms::Schema;
///
/// let password = Schema::string()
///     .required()
///     .error("Senha obrigatória")
///     .min_len(6)
///     .error("No mínimo 6 dígitos");
///
/// let form = Schema::form().field("password", password);
/// assert_eq!(form.len(), 1);
/// ```
pub struct Schema;

impl Schema {
    /// Creates a new string field schema.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gobarber_forms::Schema;
    ///
    /// let schema = Schema::string().min_len(5);
    ///
    /// assert!(schema.validate("name", Some("hello")).is_success());
    /// assert!(schema.validate("name", Some("hi")).is_failure());
    /// ```
    pub fn string() -> StringSchema {
        StringSchema::new()
    }

    /// Creates a new form schema with no fields.
    pub fn form() -> FormSchema {
        FormSchema::new()
    }
}
