//! User identity - the account record behind registration and the users API.

use crate::PasswordHash;

use chrono::{DateTime, Utc};

/// A stored user account.
///
/// Not `Serialize`; the wire shape is the server's `UserDto`, which has no
/// password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Server-assigned, never reused
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: PasswordHash,
    pub first_name: String,
    pub last_name: String,
    pub date_joined: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check a plaintext password against the stored hash
    pub fn check_password(&self, password: &str) -> bool {
        self.password_hash.verify(password)
    }
}

/// A validated identity ready to be inserted. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: PasswordHash,
    pub first_name: String,
    pub last_name: String,
    pub date_joined: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        username: String,
        email: String,
        password_hash: PasswordHash,
        first_name: String,
        last_name: String,
    ) -> Self {
        Self {
            username,
            email,
            password_hash,
            first_name,
            last_name,
            date_joined: Utc::now(),
        }
    }
}

/// Partial modification of an existing identity. `None` leaves a column as is.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password_hash: Option<PasswordHash>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.password_hash.is_none()
    }
}
