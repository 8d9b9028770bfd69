//! REST API error types
//!
//! Every failure leaves the server as `{"error": {"code", "message", "fields"?}}`
//! with a matching HTTP status.

use acct_auth::AuthError;
use acct_core::validation::user_validator::{DUPLICATE_EMAIL, DUPLICATE_USERNAME};
use acct_core::{CoreError, FieldErrors};
use acct_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{HeaderValue, StatusCode, header::WWW_AUTHENTICATE},
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const USER_NOT_FOUND: &str = "USER_NOT_FOUND";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and per-field messages
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Every failed field with its messages, for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldErrors>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Field validation failed (400)
    #[error("Validation failed: {errors} {location}")]
    Validation {
        errors: FieldErrors,
        location: ErrorLocation,
    },

    /// Missing or rejected credentials (401)
    #[error("Unauthorized [{code}]: {message} {location}")]
    Unauthorized {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500); `message` is logged, never sent
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized(code: &'static str, message: impl Into<String>) -> Self {
        ApiError::Unauthorized {
            code,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Internal { .. } => log::error!("{}", self),
            ApiError::Unauthorized { .. } => log::warn!("{}", self),
            _ => log::debug!("{}", self),
        }

        let body = match self {
            ApiError::NotFound { message, .. } => ApiErrorBody {
                code: "NOT_FOUND".into(),
                message,
                fields: None,
            },
            ApiError::Validation { errors, .. } => ApiErrorBody {
                code: "VALIDATION_ERROR".into(),
                message: "Invalid input.".into(),
                fields: Some(errors),
            },
            ApiError::Unauthorized { code, message, .. } => ApiErrorBody {
                code: code.into(),
                message,
                fields: None,
            },
            ApiError::Internal { .. } => ApiErrorBody {
                code: "INTERNAL_ERROR".into(),
                message: "Internal server error".into(),
                fields: None,
            },
            ApiError::BadRequest { message, .. } => ApiErrorBody {
                code: "BAD_REQUEST".into(),
                message,
                fields: None,
            },
        };

        let mut response = (status, Json(ApiErrorResponse { error: body })).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            // A duplicate that raced past the pre-check
            DbError::UniqueViolation { field, .. } => {
                let message = match field.as_str() {
                    "username" => DUPLICATE_USERNAME,
                    "email" => DUPLICATE_EMAIL,
                    _ => "This value is already in use.",
                };
                ApiError::Validation {
                    errors: FieldErrors::single(&field, message),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            other => ApiError::Internal {
                message: format!("Database operation failed: {}", other),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { errors, .. } => ApiError::Validation {
                errors,
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::PasswordHash { message, .. } => ApiError::Internal {
                message: format!("Password hashing failed: {}", message),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        log::debug!("Authentication failed: {}", e);
        ApiError::Unauthorized {
            code: e.error_code(),
            message: e.client_message(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Malformed or non-JSON request bodies
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
