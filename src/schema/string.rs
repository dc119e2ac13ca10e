//! String field schema validation.
//!
//! This module provides [`StringSchema`] for validating form field values
//! with constraints like required-ness, e-mail shape, length bounds and
//! regex patterns.

use once_cell::sync::Lazy;
use regex::Regex;
use stillwater::Validation;

use crate::error::{FieldError, FieldErrors};

use super::traits::FieldSchema;

// E-mail shape: local part, `@`, domain with at least one dot.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// A constraint applied to a field value.
#[derive(Clone)]
enum StringConstraint {
    Required {
        message: Option<String>,
    },
    Email {
        message: Option<String>,
    },
    MinLength {
        min: usize,
        message: Option<String>,
    },
    MaxLength {
        max: usize,
        message: Option<String>,
    },
    Pattern {
        regex: Regex,
        pattern_str: String,
        message: Option<String>,
    },
}

impl StringConstraint {
    fn message_mut(&mut self) -> &mut Option<String> {
        match self {
            StringConstraint::Required { message }
            | StringConstraint::Email { message }
            | StringConstraint::MinLength { message, .. }
            | StringConstraint::MaxLength { message, .. }
            | StringConstraint::Pattern { message, .. } => message,
        }
    }
}

/// A schema for validating a single string form field.
///
/// Constraints are checked in declaration order and every violation is
/// reported; a value that is both too short and badly shaped yields two
/// errors. Messages are templates: `{field}`, `{min}`, `{max}` and
/// `{pattern}` are replaced when the error is produced.
///
/// Only `required` rejects a missing or empty value. The shape checks
/// (`email`, `pattern`) skip empty values, and `min_len`/`max_len` skip
/// missing ones, so an empty form reports "required" rather than a pile of
/// format errors.
///
/// # Example
///
/// ```rust
/// use gobarber_forms::Schema;
///
/// let schema = Schema::string()
///     .required()
///     .error("Senha obrigatória")
///     .min_len(6)
///     .error("No mínimo {min} dígitos");
///
/// let result = schema.validate("password", Some("123"));
/// assert!(result.is_failure());
/// ```
#[derive(Clone, Default)]
pub struct StringSchema {
    constraints: Vec<StringConstraint>,
}

impl StringSchema {
    /// Creates a new string schema with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires a non-empty value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gobarber_forms::Schema;
    ///
    /// let schema = Schema::string().required();
    ///
    /// assert!(schema.validate("name", Some("Ana")).is_success());
    /// assert!(schema.validate("name", Some("")).is_failure());
    /// assert!(schema.validate("name", None).is_failure());
    /// ```
    pub fn required(mut self) -> Self {
        self.constraints
            .push(StringConstraint::Required { message: None });
        self
    }

    /// Requires a non-empty value to look like an e-mail address.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gobarber_forms::Schema;
    ///
    /// let schema = Schema::string().email();
    ///
    /// assert!(schema.validate("email", Some("ana@gobarber.com")).is_success());
    /// assert!(schema.validate("email", Some("not-an-email")).is_failure());
    /// // Empty values are left to `required`
    /// assert!(schema.validate("email", Some("")).is_success());
    /// ```
    pub fn email(mut self) -> Self {
        self.constraints
            .push(StringConstraint::Email { message: None });
        self
    }

    /// Adds a minimum length constraint.
    ///
    /// The value must have at least `min` characters (Unicode scalar values).
    ///
    /// # Example
    ///
    /// ```rust
    /// use gobarber_forms::Schema;
    ///
    /// let schema = Schema::string().min_len(6);
    ///
    /// assert!(schema.validate("password", Some("123456")).is_success());
    /// assert!(schema.validate("password", Some("12345")).is_failure());
    /// ```
    pub fn min_len(mut self, min: usize) -> Self {
        self.constraints
            .push(StringConstraint::MinLength { min, message: None });
        self
    }

    /// Adds a maximum length constraint.
    ///
    /// The value must have at most `max` characters (Unicode scalar values).
    pub fn max_len(mut self, max: usize) -> Self {
        self.constraints
            .push(StringConstraint::MaxLength { max, message: None });
        self
    }

    /// Adds a regex pattern constraint.
    ///
    /// A non-empty value must match the provided pattern.
    /// Returns an error if the regex pattern is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gobarber_forms::Schema;
    ///
    /// let schema = Schema::string().pattern(r"^\d+$").unwrap();
    ///
    /// assert!(schema.validate("phone", Some("11999")).is_success());
    /// assert!(schema.validate("phone", Some("abc")).is_failure());
    /// ```
    pub fn pattern(mut self, pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(pattern)?;
        self.constraints.push(StringConstraint::Pattern {
            regex,
            pattern_str: pattern.to_string(),
            message: None,
        });
        Ok(self)
    }

    /// Sets a custom message template for the most recent constraint.
    ///
    /// Has no effect when no constraint has been added yet.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gobarber_forms::Schema;
    ///
    /// let schema = Schema::string().required().error("Nome obrigatório");
    ///
    /// let errors = schema.validate("name", None).into_result().unwrap_err();
    /// assert_eq!(errors.first().message, "Nome obrigatório");
    /// ```
    pub fn error(mut self, message: impl Into<String>) -> Self {
        if let Some(last) = self.constraints.last_mut() {
            *last.message_mut() = Some(message.into());
        }
        self
    }

    /// Returns the number of declared constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Validates the value of `field` against this schema.
    ///
    /// `value` is `None` when the form snapshot has no entry for the field.
    /// Returns `Validation::Success` with the value if all constraints pass,
    /// or `Validation::Failure` with every violation in declaration order.
    pub fn validate(&self, field: &str, value: Option<&str>) -> Validation<Option<String>, FieldErrors> {
        let errors: Vec<FieldError> = self
            .constraints
            .iter()
            .filter_map(|c| check_constraint(c, field, value))
            .collect();

        match FieldErrors::from_vec(errors) {
            Some(errors) => Validation::Failure(errors),
            None => Validation::Success(value.map(str::to_string)),
        }
    }
}

impl FieldSchema for StringSchema {
    fn validate_field(
        &self,
        field: &str,
        value: Option<&str>,
    ) -> Validation<Option<String>, FieldErrors> {
        self.validate(field, value)
    }
}

/// Checks a single constraint and returns an error if it fails.
fn check_constraint(
    constraint: &StringConstraint,
    field: &str,
    value: Option<&str>,
) -> Option<FieldError> {
    match constraint {
        StringConstraint::Required { message } => {
            if value.map_or(true, str::is_empty) {
                let msg = render(message, "{field} is a required field", field, &[]);
                Some(FieldError::new(field, msg).with_code("required"))
            } else {
                None
            }
        }
        StringConstraint::Email { message } => match value {
            Some(v) if !v.is_empty() && !EMAIL_REGEX.is_match(v) => {
                let msg = render(message, "{field} must be a valid email", field, &[]);
                Some(FieldError::new(field, msg).with_code("email"))
            }
            _ => None,
        },
        StringConstraint::MinLength { min, message } => {
            let len = value?.chars().count();
            if len < *min {
                let msg = render(
                    message,
                    "{field} must be at least {min} characters",
                    field,
                    &[("{min}", min.to_string())],
                );
                Some(FieldError::new(field, msg).with_code("min_length"))
            } else {
                None
            }
        }
        StringConstraint::MaxLength { max, message } => {
            let len = value?.chars().count();
            if len > *max {
                let msg = render(
                    message,
                    "{field} must be at most {max} characters",
                    field,
                    &[("{max}", max.to_string())],
                );
                Some(FieldError::new(field, msg).with_code("max_length"))
            } else {
                None
            }
        }
        StringConstraint::Pattern {
            regex,
            pattern_str,
            message,
        } => match value {
            Some(v) if !v.is_empty() && !regex.is_match(v) => {
                let msg = render(
                    message,
                    "{field} must match the following: \"{pattern}\"",
                    field,
                    &[("{pattern}", pattern_str.clone())],
                );
                Some(FieldError::new(field, msg).with_code("pattern"))
            }
            _ => None,
        },
    }
}

/// Resolves a message template, falling back to `default` when unset.
fn render(template: &Option<String>, default: &str, field: &str, params: &[(&str, String)]) -> String {
    let template = template.as_deref().unwrap_or(default);
    params
        .iter()
        .fold(template.replace("{field}", field), |msg, (key, value)| {
            msg.replace(key, value)
        })
}
