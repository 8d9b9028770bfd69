use acct_core::FieldInput;

use serde::Deserialize;

/// Body of `POST /register/` and `POST /users/`.
///
/// Fields decode as [`FieldInput`] so a missing, `null` or mistyped field is
/// reported alongside every other failed field instead of aborting decoding.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: FieldInput,

    #[serde(default)]
    pub email: FieldInput,

    /// Write-only
    #[serde(default)]
    pub password: FieldInput,

    #[serde(default)]
    pub first_name: FieldInput,

    #[serde(default)]
    pub last_name: FieldInput,
}
