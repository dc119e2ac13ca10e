//! Error types for validation failures.
//!
//! This module provides types for representing field-level validation
//! failures: which field, which constraint, and the message to display.

mod field_error;

pub use field_error::{FieldError, FieldErrors};
