use crate::{CoreError, FieldErrors};

#[test]
fn test_empty_errors_into_ok() {
    assert!(FieldErrors::new().into_result().is_ok());
}

#[test]
fn test_errors_group_messages_by_field() {
    let mut errors = FieldErrors::new();
    errors.add("username", "first");
    errors.add("email", "second");
    errors.add("username", "third");

    assert_eq!(errors.messages("username"), ["first", "third"]);
    assert_eq!(errors.messages("email"), ["second"]);
    assert_eq!(errors.messages("password"), [] as [String; 0]);
    assert!(!errors.contains("password"));
}

#[test]
fn test_non_empty_errors_into_validation_error() {
    let errors = FieldErrors::single("email", "Enter a valid email address.");

    match errors.into_result() {
        Err(CoreError::Validation { errors, .. }) => {
            assert!(errors.contains("email"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_serializes_as_field_map() {
    let mut errors = FieldErrors::single("username", "taken");
    errors.add("email", "invalid");

    let json = serde_json::to_value(&errors).unwrap();

    assert_eq!(
        json,
        serde_json::json!({"email": ["invalid"], "username": ["taken"]})
    );
}

#[test]
fn test_display_lists_fields() {
    let mut errors = FieldErrors::single("username", "taken");
    errors.add("email", "invalid");

    assert_eq!(errors.to_string(), "email: invalid; username: taken");
}
