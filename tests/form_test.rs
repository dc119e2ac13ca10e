//! Integration tests for the sign-in and sign-up form schemas.

use gobarber_forms::{forms, normalize, FieldErrors, FormValues, Schema};

/// Helper to extract the error value from a Validation
fn unwrap_failure<T, E>(v: stillwater::Validation<T, E>) -> E
where
    T: std::fmt::Debug,
{
    v.into_result().unwrap_err()
}

fn messages_for<'a>(errors: &'a FieldErrors, field: &str) -> Vec<&'a str> {
    errors
        .for_field(field)
        .into_iter()
        .map(|e| e.message.as_str())
        .collect()
}

#[test]
fn test_sign_in_empty_fields_are_required() {
    let values = FormValues::new().with("email", "").with("password", "");

    let errors = unwrap_failure(forms::sign_in().validate(&values));

    assert_eq!(errors.len(), 2);
    assert_eq!(errors.for_field("email")[0].code, "required");
    assert_eq!(errors.for_field("password")[0].code, "required");
    assert_eq!(messages_for(&errors, "email"), vec!["Email é obrigatório"]);
    assert_eq!(messages_for(&errors, "password"), vec!["Senha é obrigatório"]);
}

#[test]
fn test_sign_in_bad_email() {
    let values = FormValues::new()
        .with("email", "not-an-email")
        .with("password", "x");

    let errors = unwrap_failure(forms::sign_in().validate(&values));

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.first().field, "email");
    assert_eq!(errors.first().message, "Digite um e-mail válido");
}

#[test]
fn test_sign_up_short_password() {
    let values = FormValues::new()
        .with("name", "Ana")
        .with("email", "a@b.com")
        .with("password", "12345");

    let errors = unwrap_failure(forms::sign_up().validate(&values));

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.first().field, "password");
    assert_eq!(errors.first().message, "No mínimo 6 dígitos");
}

#[test]
fn test_sign_up_valid_snapshot() {
    let values = FormValues::new()
        .with("name", "Ana")
        .with("email", "a@b.com")
        .with("password", "123456");

    let validated = forms::sign_up().validate(&values).into_result().unwrap();
    assert_eq!(validated, values);
}

#[test]
fn test_sign_up_empty_form_reports_every_field() {
    let errors = unwrap_failure(forms::sign_up().validate(&FormValues::new()));

    assert!(errors.has_field("name"));
    assert!(errors.has_field("email"));
    // A missing password is not checked for length, and sign-up has no
    // required rule on it.
    assert!(!errors.has_field("password"));
}

#[test]
fn test_validation_is_idempotent() {
    let schema = forms::sign_up();
    let values = FormValues::new()
        .with("name", "")
        .with("email", "ana@")
        .with("password", "1");

    let first = unwrap_failure(schema.validate(&values));
    let second = unwrap_failure(schema.validate(&values));
    assert_eq!(first, second);
}

#[test]
fn test_fields_outside_schema_are_not_validated() {
    let values = FormValues::new()
        .with("email", "a@b.com")
        .with("password", "x")
        .with("name", "");

    assert!(forms::sign_in().validate(&values).is_success());
}

#[test]
fn test_normalized_errors_for_display() {
    let schema = Schema::form()
        .field(
            "password",
            Schema::string()
                .required()
                .error("Senha obrigatória")
                .min_len(6)
                .error("No mínimo 6 dígitos"),
        )
        .field("name", Schema::string().required().error("Nome obrigatório"));

    let errors = unwrap_failure(schema.validate(&FormValues::new().with("password", "")));
    assert_eq!(errors.len(), 3);

    let map = normalize(&errors);
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("password"), Some("No mínimo 6 dígitos"));
    assert_eq!(map.get("name"), Some("Nome obrigatório"));
}
