use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

const BEARER_PREFIX: &str = "Bearer ";

/// Extract the token from an `Authorization` header value
#[track_caller]
pub fn bearer_token(header_value: &str) -> AuthErrorResult<&str> {
    let Some(token) = header_value.strip_prefix(BEARER_PREFIX) else {
        return Err(AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        });
    };

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::InvalidToken {
            message: "empty bearer token".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(token)
}
