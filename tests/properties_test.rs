//! Property tests for the form schemas and the error normalizer.

use gobarber_forms::{forms, normalize, FieldError, FieldErrors, FormValues};
use proptest::prelude::*;

fn name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,20}"
}

fn email() -> impl Strategy<Value = String> {
    ("[a-z0-9._]{1,12}", "[a-z0-9-]{1,12}", "[a-z]{2,6}")
        .prop_map(|(local, domain, tld)| format!("{local}@{domain}.{tld}"))
}

fn field() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["name", "email", "password"]).prop_map(str::to_string)
}

proptest! {
    #[test]
    fn valid_sign_up_snapshots_pass(
        name in name(),
        email in email(),
        password in "[0-9a-zA-Z]{6,20}",
    ) {
        let values = FormValues::new()
            .with("name", name)
            .with("email", email)
            .with("password", password);

        prop_assert!(forms::sign_up().validate(&values).is_success());
    }

    #[test]
    fn valid_sign_in_snapshots_pass(email in email(), password in ".{1,20}") {
        let values = FormValues::new()
            .with("email", email)
            .with("password", password);

        prop_assert!(forms::sign_in().validate(&values).is_success());
    }

    #[test]
    fn missing_required_field_is_named(
        email in email(),
        missing in prop::sample::select(vec!["name", "email"]),
    ) {
        let mut values = FormValues::new()
            .with("name", "Ana")
            .with("email", email)
            .with("password", "123456");
        values.set(missing, "");

        let errors = forms::sign_up()
            .validate(&values)
            .into_result()
            .unwrap_err();
        prop_assert!(errors.has_field(missing));
    }

    #[test]
    fn short_passwords_fail_sign_up(password in "[0-9]{0,5}") {
        let values = FormValues::new()
            .with("name", "Ana")
            .with("email", "a@b.com")
            .with("password", password);

        let errors = forms::sign_up()
            .validate(&values)
            .into_result()
            .unwrap_err();
        prop_assert_eq!(errors.first().message.as_str(), "No mínimo 6 dígitos");
    }

    #[test]
    fn validation_is_idempotent(
        name in ".{0,8}",
        email in ".{0,12}",
        password in ".{0,8}",
    ) {
        let schema = forms::sign_up();
        let values = FormValues::new()
            .with("name", name)
            .with("email", email)
            .with("password", password);

        let first = schema.validate(&values).into_result();
        let second = schema.validate(&values).into_result();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn normalizer_keeps_last_message_per_field(
        entries in prop::collection::vec((field(), "[a-z]{1,8}"), 1..20),
    ) {
        let errors = FieldErrors::from_vec(
            entries
                .iter()
                .map(|(field, message)| FieldError::new(field.clone(), message.clone()))
                .collect(),
        )
        .unwrap();

        let map = normalize(&errors);
        prop_assert_eq!(&map, &normalize(&errors));

        for (field, _) in &entries {
            let last = entries
                .iter()
                .rev()
                .find(|(f, _)| f == field)
                .map(|(_, m)| m.as_str());
            prop_assert_eq!(map.get(field), last);
        }
    }
}
