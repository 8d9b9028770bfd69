use crate::PasswordHash;

#[test]
fn test_hash_verifies_original_password() {
    let hash = PasswordHash::from_plaintext("securepassword").unwrap();

    assert!(hash.verify("securepassword"));
    assert!(!hash.verify("wrong-password"));
}

#[test]
fn test_hash_is_not_plaintext() {
    let hash = PasswordHash::from_plaintext("securepassword").unwrap();

    assert!(!hash.as_str().contains("securepassword"));
    assert!(hash.as_str().starts_with("$argon2id$"));
}

#[test]
fn test_same_password_hashes_differently() {
    let first = PasswordHash::from_plaintext("securepassword").unwrap();
    let second = PasswordHash::from_plaintext("securepassword").unwrap();

    assert_ne!(first, second);
    assert!(first.verify("securepassword"));
    assert!(second.verify("securepassword"));
}

#[test]
fn test_stored_hash_round_trips_through_phc_string() {
    let hash = PasswordHash::from_plaintext("securepassword").unwrap();
    let restored = PasswordHash::from_phc(hash.as_str());

    assert!(restored.verify("securepassword"));
}

#[test]
fn test_malformed_stored_hash_never_verifies() {
    let hash = PasswordHash::from_phc("not-a-phc-string");

    assert!(!hash.verify("not-a-phc-string"));
    assert!(!hash.verify(""));
}

#[test]
fn test_debug_output_is_redacted() {
    let hash = PasswordHash::from_plaintext("securepassword").unwrap();
    let debug = format!("{:?}", hash);

    assert_eq!(debug, "PasswordHash(<redacted>)");
}
