use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Stable machine-readable code sent to clients
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken { .. } => "INVALID_TOKEN",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::MissingHeader { .. } => "NOT_AUTHENTICATED",
            Self::InvalidScheme { .. } => "INVALID_AUTH_SCHEME",
            Self::JwtDecode { .. } => "JWT_DECODE_FAILED",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
        }
    }

    /// Client-facing message without source locations
    pub fn client_message(&self) -> String {
        match self {
            Self::InvalidToken { message, .. } => format!("Invalid token: {}", message),
            Self::TokenExpired { .. } => "Token has expired".to_string(),
            Self::MissingHeader { .. } => {
                "Authentication credentials were not provided.".to_string()
            }
            Self::InvalidScheme { .. } => {
                "Invalid authorization scheme: expected 'Bearer'".to_string()
            }
            Self::JwtDecode { .. } => "Token could not be decoded".to_string(),
            Self::InvalidClaim { claim, message, .. } => {
                format!("Invalid claim '{}': {}", claim, message)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
