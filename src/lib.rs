//! # gobarber-forms
//!
//! Validation and submission for the GoBarber sign-in and sign-up screens.
//! Every violated constraint of every field is collected in one pass, then
//! flattened to one message per field for display next to the inputs.
//!
//! ## Overview
//!
//! Validation never short-circuits: an empty sign-up form reports the name,
//! the e-mail and the password at once. Results use stillwater's
//! `Validation` type, and failures carry a non-empty [`FieldErrors`].
//!
//! ## Core Types
//!
//! - [`FormValues`]: a snapshot of the current field values
//! - [`Schema`], [`FormSchema`], [`StringSchema`]: declarative per-field rules
//! - [`FieldError`] / [`FieldErrors`]: violated constraints
//! - [`ErrorMap`] / [`normalize`]: one display message per field
//! - [`FormRegistry`]: schemas built once and shared
//! - [`flow::FormScreen`]: the validate-then-submit driver
//! - [`ApiClient`]: `POST /users` and `POST /sessions`
//!
//! ## Example
//!
//! ```rust
//! use gobarber_forms::{forms, normalize, FormValues};
//!
//! let schema = forms::sign_up();
//!
//! let values = FormValues::new()
//!     .with("name", "Ana")
//!     .with("email", "a@b.com")
//!     .with("password", "12345");
//!
//! let errors = schema.validate(&values).into_result().unwrap_err();
//! let map = normalize(&errors);
//! assert_eq!(map.get("password"), Some("No mínimo 6 dígitos"));
//! ```

pub mod api;
pub mod error;
pub mod flow;
pub mod forms;
pub mod normalize;
pub mod registry;
pub mod schema;
pub mod values;

pub use api::{ApiClient, ApiConfig, ApiError, Authenticator, Credentials, NewUser, Session, UserDirectory};
pub use error::{FieldError, FieldErrors};
pub use normalize::{normalize, ErrorMap};
pub use registry::{FormRegistry, RegistryError};
pub use schema::{FieldSchema, FormSchema, Schema, StringSchema};
pub use values::FormValues;

/// Type alias for validation results using FieldErrors
pub type ValidationResult<T> = stillwater::Validation<T, FieldErrors>;
