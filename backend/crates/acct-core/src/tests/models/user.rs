use crate::{NewUser, PasswordHash, User, UserChanges};

use chrono::Utc;

fn sample_user() -> User {
    let now = Utc::now();
    User {
        id: 1,
        username: "newuser".to_string(),
        email: "newuser@example.com".to_string(),
        password_hash: PasswordHash::from_plaintext("securepassword").unwrap(),
        first_name: String::new(),
        last_name: String::new(),
        date_joined: now,
        updated_at: now,
    }
}

#[test]
fn test_new_user_sets_date_joined() {
    let before = Utc::now();
    let new_user = NewUser::new(
        "newuser".to_string(),
        "newuser@example.com".to_string(),
        PasswordHash::from_plaintext("securepassword").unwrap(),
        "New".to_string(),
        "User".to_string(),
    );

    assert_eq!(new_user.username, "newuser");
    assert_eq!(new_user.first_name, "New");
    assert!(new_user.date_joined >= before);
}

#[test]
fn test_user_check_password() {
    let user = sample_user();

    assert!(user.check_password("securepassword"));
    assert!(!user.check_password("SecurePassword"));
}

#[test]
fn test_user_debug_does_not_leak_hash() {
    let user = sample_user();
    let debug = format!("{:?}", user);

    assert!(!debug.contains(user.password_hash.as_str()));
    assert!(debug.contains("newuser"));
}

#[test]
fn test_user_changes_is_empty() {
    assert!(UserChanges::default().is_empty());

    let changes = UserChanges {
        last_name: Some("Smith".to_string()),
        ..Default::default()
    };
    assert!(!changes.is_empty());
}
