use crate::validation::user_validator::{
    BLANK, INVALID_EMAIL, INVALID_USERNAME, NOT_A_STRING, NULL, REQUIRED,
};
use crate::{CoreError, FieldErrors, FieldInput, Presence, UserValidator};

fn some(value: &str) -> FieldInput {
    FieldInput::text(value)
}

fn rejected(validator: UserValidator) -> FieldErrors {
    match validator.finish() {
        Err(CoreError::Validation { errors, .. }) => errors,
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_valid_registration_fields_pass() {
    let mut validator = UserValidator::new();

    let username = validator.username(some("newuser"), Presence::Required);
    let email = validator.email(some("newuser@example.com"), Presence::Required);
    let password = validator.password(some("securepassword"), Presence::Required);
    let first_name = validator.first_name(FieldInput::Absent);

    assert_eq!(username.as_deref(), Some("newuser"));
    assert_eq!(email.as_deref(), Some("newuser@example.com"));
    assert_eq!(password.as_deref(), Some("securepassword"));
    assert_eq!(first_name, None);
    assert!(validator.finish().is_ok());
}

#[test]
fn test_missing_required_fields_are_all_reported() {
    let mut validator = UserValidator::new();

    validator.username(FieldInput::Absent, Presence::Required);
    validator.email(FieldInput::Absent, Presence::Required);
    validator.password(FieldInput::Absent, Presence::Required);

    match validator.finish() {
        Err(CoreError::Validation { errors, .. }) => {
            assert_eq!(errors.messages("username"), [REQUIRED]);
            assert_eq!(errors.messages("email"), [REQUIRED]);
            assert_eq!(errors.messages("password"), [REQUIRED]);
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_optional_presence_accepts_absent_fields() {
    let mut validator = UserValidator::new();

    assert_eq!(validator.username(FieldInput::Absent, Presence::Optional), None);
    assert_eq!(validator.email(FieldInput::Absent, Presence::Optional), None);
    assert_eq!(validator.password(FieldInput::Absent, Presence::Optional), None);
    assert!(validator.finish().is_ok());
}

#[test]
fn test_blank_username_rejected() {
    let mut validator = UserValidator::new();

    assert_eq!(validator.username(some("   "), Presence::Required), None);
    assert_eq!(rejected(validator).messages("username"), [BLANK]);
}

#[test]
fn test_username_is_trimmed() {
    let mut validator = UserValidator::new();

    let username = validator.username(some("  newuser  "), Presence::Required);

    assert_eq!(username.as_deref(), Some("newuser"));
}

#[test]
fn test_username_allowed_characters() {
    let mut validator = UserValidator::new();

    assert!(
        validator
            .username(some("jo.doe+test@home-01_x"), Presence::Required)
            .is_some()
    );
    assert!(validator.username(some("Zoë"), Presence::Required).is_some());
    assert!(
        validator
            .username(some("has space"), Presence::Required)
            .is_none()
    );

    match validator.finish() {
        Err(CoreError::Validation { errors, .. }) => {
            assert_eq!(errors.messages("username"), [INVALID_USERNAME]);
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_username_length_limit() {
    let mut validator = UserValidator::new();

    assert!(
        validator
            .username(FieldInput::Text("a".repeat(150)), Presence::Required)
            .is_some()
    );
    assert!(validator.finish().is_ok());

    let mut validator = UserValidator::new();
    assert!(
        validator
            .username(FieldInput::Text("a".repeat(151)), Presence::Required)
            .is_none()
    );
    assert!(rejected(validator).contains("username"));
}

#[test]
fn test_email_is_normalized() {
    let mut validator = UserValidator::new();

    let email = validator.email(some(" Jane@Example.COM "), Presence::Required);

    assert_eq!(email.as_deref(), Some("Jane@example.com"));
}

#[test]
fn test_malformed_email_rejected() {
    let mut validator = UserValidator::new();

    assert_eq!(validator.email(some("not-an-email"), Presence::Required), None);

    match validator.finish() {
        Err(CoreError::Validation { errors, .. }) => {
            assert_eq!(errors.messages("email"), [INVALID_EMAIL]);
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_password_keeps_whitespace_and_rejects_empty() {
    let mut validator = UserValidator::new();

    let password = validator.password(some(" padded "), Presence::Required);
    assert_eq!(password.as_deref(), Some(" padded "));

    assert_eq!(validator.password(some(""), Presence::Required), None);
    assert!(rejected(validator).contains("password"));
}

#[test]
fn test_names_allow_blank_but_not_overlong() {
    let mut validator = UserValidator::new();

    assert_eq!(validator.first_name(some("  ")).as_deref(), Some(""));
    assert_eq!(validator.last_name(some(" Smith ")).as_deref(), Some("Smith"));
    assert!(validator.finish().is_ok());

    let mut validator = UserValidator::new();
    assert_eq!(validator.last_name(FieldInput::Text("x".repeat(151))), None);
    assert!(rejected(validator).contains("last_name"));
}

#[test]
fn test_reject_records_external_error() {
    let mut validator = UserValidator::new();

    validator.username(some("newuser"), Presence::Required);
    validator.reject("username", "A user with that username already exists.");

    assert!(rejected(validator).contains("username"));
}

#[test]
fn test_null_is_rejected_even_when_optional() {
    let mut validator = UserValidator::new();

    assert_eq!(validator.username(FieldInput::Null, Presence::Optional), None);
    assert_eq!(validator.first_name(FieldInput::Null), None);

    let errors = rejected(validator);
    assert_eq!(errors.messages("username"), [NULL]);
    assert_eq!(errors.messages("first_name"), [NULL]);
}

#[test]
fn test_non_string_values_are_rejected() {
    let mut validator = UserValidator::new();

    assert_eq!(
        validator.email(FieldInput::NotAString, Presence::Required),
        None
    );
    assert_eq!(validator.last_name(FieldInput::NotAString), None);

    let errors = rejected(validator);
    assert_eq!(errors.messages("email"), [NOT_A_STRING]);
    assert_eq!(errors.messages("last_name"), [NOT_A_STRING]);
}
