//! The GoBarber sign-in and sign-up form schemas.
//!
//! Messages are in Portuguese, as shown on the screens.

use crate::schema::{FormSchema, Schema};

/// Field name of the user's display name.
pub const NAME: &str = "name";
/// Field name of the e-mail address.
pub const EMAIL: &str = "email";
/// Field name of the password.
pub const PASSWORD: &str = "password";

/// Minimum password length accepted at sign-up.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Registry name of the sign-in schema.
pub const SIGN_IN: &str = "sign-in";
/// Registry name of the sign-up schema.
pub const SIGN_UP: &str = "sign-up";

/// Builds the sign-in schema: e-mail and password.
///
/// # Example
///
/// ```rust
/// use gobarber_forms::{forms, FormValues};
///
/// let schema = forms::sign_in();
/// let values = FormValues::new()
///     .with("email", "ana@gobarber.com")
///     .with("password", "x");
///
/// assert!(schema.validate(&values).is_success());
/// ```
pub fn sign_in() -> FormSchema {
    Schema::form()
        .field(
            EMAIL,
            Schema::string()
                .required()
                .error("Email é obrigatório")
                .email()
                .error("Digite um e-mail válido"),
        )
        .field(
            PASSWORD,
            Schema::string().required().error("Senha é obrigatório"),
        )
}

/// Builds the sign-up schema: name, e-mail and a password of at least
/// [`MIN_PASSWORD_LEN`] characters.
pub fn sign_up() -> FormSchema {
    Schema::form()
        .field(NAME, Schema::string().required().error("Nome obrigatório"))
        .field(
            EMAIL,
            Schema::string()
                .required()
                .error("E-mail obrigatório")
                .email()
                .error("Digite um e-mail válido"),
        )
        .field(
            PASSWORD,
            Schema::string()
                .min_len(MIN_PASSWORD_LEN)
                .error("No mínimo {min} dígitos"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::FormValues;

    #[test]
    fn test_sign_in_fields() {
        let names: Vec<_> = sign_in().field_names().map(str::to_string).collect();
        assert_eq!(names, vec![EMAIL, PASSWORD]);
    }

    #[test]
    fn test_sign_up_fields() {
        let names: Vec<_> = sign_up().field_names().map(str::to_string).collect();
        assert_eq!(names, vec![NAME, EMAIL, PASSWORD]);
    }

    #[test]
    fn test_sign_up_empty_password_hits_min_length() {
        let values = FormValues::new()
            .with(NAME, "Ana")
            .with(EMAIL, "a@b.com")
            .with(PASSWORD, "");

        let errors = sign_up().validate(&values).into_result().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first().message, "No mínimo 6 dígitos");
    }
}
