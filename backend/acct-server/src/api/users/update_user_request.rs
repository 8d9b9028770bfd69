use acct_core::FieldInput;

use serde::Deserialize;

/// Body of `PUT` and `PATCH /users/{id}/`.
/// PUT requires `username` and `email`; PATCH changes only what is given.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub username: FieldInput,

    #[serde(default)]
    pub email: FieldInput,

    #[serde(default)]
    pub first_name: FieldInput,

    #[serde(default)]
    pub last_name: FieldInput,

    /// Replaces the stored hash when present
    #[serde(default)]
    pub password: FieldInput,
}
