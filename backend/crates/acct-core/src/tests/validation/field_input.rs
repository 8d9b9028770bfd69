use crate::FieldInput;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Body {
    #[serde(default)]
    username: FieldInput,
}

fn decode(json: &str) -> FieldInput {
    serde_json::from_str::<Body>(json).unwrap().username
}

#[test]
fn test_missing_key_is_absent() {
    assert_eq!(decode("{}"), FieldInput::Absent);
}

#[test]
fn test_null_is_kept_apart_from_absent() {
    assert_eq!(decode(r#"{"username": null}"#), FieldInput::Null);
}

#[test]
fn test_strings_and_numbers_become_text() {
    assert_eq!(decode(r#"{"username": "alice"}"#), FieldInput::text("alice"));
    assert_eq!(decode(r#"{"username": 42}"#), FieldInput::text("42"));
    assert_eq!(decode(r#"{"username": -7}"#), FieldInput::text("-7"));
    assert_eq!(decode(r#"{"username": 1.5}"#), FieldInput::text("1.5"));
}

#[test]
fn test_other_types_are_not_strings() {
    assert_eq!(decode(r#"{"username": true}"#), FieldInput::NotAString);
    assert_eq!(decode(r#"{"username": ["a", 1]}"#), FieldInput::NotAString);
    assert_eq!(
        decode(r#"{"username": {"nested": {"x": 1}}}"#),
        FieldInput::NotAString
    );
}

#[test]
fn test_later_fields_still_decode_after_a_container() {
    #[derive(Debug, Deserialize)]
    struct Pair {
        #[serde(default)]
        first: FieldInput,
        #[serde(default)]
        second: FieldInput,
    }

    let pair: Pair = serde_json::from_str(r#"{"first": [1, [2]], "second": "ok"}"#).unwrap();

    assert_eq!(pair.first, FieldInput::NotAString);
    assert_eq!(pair.second, FieldInput::text("ok"));
}
