//! Integration tests for FieldError, FieldErrors and ErrorMap.

use gobarber_forms::{normalize, ErrorMap, FieldError, FieldErrors, ValidationResult};
use stillwater::prelude::*;
use stillwater::Validation;

#[test]
fn test_errors_combine_via_semigroup() {
    let e1 = FieldErrors::single(FieldError::new("name", "Nome obrigatório"));
    let e2 = FieldErrors::single(FieldError::new("email", "E-mail obrigatório"));
    let e3 = FieldErrors::single(FieldError::new("password", "No mínimo 6 dígitos"));

    let combined = e1.combine(e2).combine(e3);

    assert_eq!(combined.len(), 3);
    let fields: Vec<&str> = combined.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["name", "email", "password"]);
}

#[test]
fn test_validation_result_alias() {
    let result: ValidationResult<i32> = Validation::Success(42);
    assert!(result.is_success());

    let result: ValidationResult<i32> =
        Validation::Failure(FieldErrors::single(FieldError::new("age", "invalid")));
    assert!(result.is_failure());
}

#[test]
fn test_errors_are_std_errors() {
    fn takes_error(_: &dyn std::error::Error) {}

    let error = FieldError::new("email", "invalid");
    takes_error(&error);
    takes_error(&FieldErrors::single(error));
}

#[test]
fn test_normalizer_is_deterministic() {
    let errors = FieldErrors::from_vec(vec![
        FieldError::new("email", "a"),
        FieldError::new("password", "b"),
        FieldError::new("email", "c"),
    ])
    .unwrap();

    assert_eq!(normalize(&errors), normalize(&errors));
}

#[test]
fn test_normalizer_keeps_last_occurrence() {
    let errors = FieldErrors::from_vec(vec![
        FieldError::new("password", "Senha obrigatória").with_code("required"),
        FieldError::new("password", "No mínimo 6 dígitos").with_code("min_length"),
        FieldError::new("name", "Nome obrigatório"),
        FieldError::new("password", "Só números").with_code("pattern"),
    ])
    .unwrap();

    let map = ErrorMap::from(&errors);
    assert_eq!(map.get("password"), Some("Só números"));
    assert_eq!(map.get("name"), Some("Nome obrigatório"));
    assert_eq!(map.len(), 2);
}

#[test]
fn test_error_map_serializes_flat() {
    let map = normalize(&FieldErrors::single(FieldError::new("email", "inválido")));
    assert_eq!(
        serde_json::to_value(&map).unwrap(),
        serde_json::json!({"email": "inválido"})
    );
}
