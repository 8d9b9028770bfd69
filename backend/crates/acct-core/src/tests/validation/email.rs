use crate::{is_valid_email, normalize_email};

#[test]
fn test_accepts_common_addresses() {
    for email in [
        "newuser@example.com",
        "first.last@sub.example.co.uk",
        "user+tag@example.org",
        "o'brien@example.ie",
        "admin@localhost",
        "user@example.xn--p1ai",
        "a_b-c@my-host.example.com",
    ] {
        assert!(is_valid_email(email), "expected valid: {}", email);
    }
}

#[test]
fn test_rejects_malformed_addresses() {
    for email in [
        "",
        "plainaddress",
        "@example.com",
        "user@",
        "user@example",
        "user@.example.com",
        "user@example..com",
        "user@-example.com",
        "user@example-.com",
        "user@example.c",
        "user@example.123",
        ".user@example.com",
        "user.@example.com",
        "us..er@example.com",
        "us er@example.com",
        "user@exa mple.com",
        "user@@example.com",
    ] {
        assert!(!is_valid_email(email), "expected invalid: {}", email);
    }
}

#[test]
fn test_rejects_overlong_addresses() {
    let local = "a".repeat(65);
    assert!(!is_valid_email(&format!("{}@example.com", local)));

    let domain = format!("{}.com", "a".repeat(250));
    assert!(!is_valid_email(&format!("user@{}", domain)));
}

#[test]
fn test_normalize_lowercases_domain_only() {
    assert_eq!(
        normalize_email("John.Doe@EXAMPLE.Com"),
        "John.Doe@example.com"
    );
    assert_eq!(normalize_email("no-at-sign"), "no-at-sign");
}
