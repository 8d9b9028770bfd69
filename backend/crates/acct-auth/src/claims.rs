use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// The only `token_type` accepted on API requests
pub const ACCESS_TOKEN_TYPE: &str = "access";

/// JWT claims issued by the token service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the decimal user id
    pub sub: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Refresh tokens carry "refresh" and are rejected here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        self.user_id()?;

        if let Some(token_type) = &self.token_type
            && token_type != ACCESS_TOKEN_TYPE
        {
            return Err(AuthError::InvalidClaim {
                claim: "token_type".to_string(),
                message: format!("expected '{}', got '{}'", ACCESS_TOKEN_TYPE, token_type),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Parse `sub` as a user id
    #[track_caller]
    pub fn user_id(&self) -> AuthErrorResult<i64> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (user_id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.sub.parse::<i64>().map_err(|_| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: "sub (user_id) must be an integer".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
