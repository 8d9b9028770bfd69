use crate::ApiError;

use acct_auth::AuthError;
use acct_core::{CoreError, FieldErrors};
use acct_db::DbError;

use std::panic::Location;

use axum::http::{StatusCode, header::WWW_AUTHENTICATE};
use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http_body_util::BodyExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::not_found("User 9 not found");
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "User 9 not found");
    assert!(json["error"].get("fields").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_every_field() {
    let mut errors = FieldErrors::new();
    errors.add("username", "A user with that username already exists.");
    errors.add("email", "Enter a valid email address.");
    let error = ApiError::Validation {
        errors,
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(
        json["error"]["fields"]["username"][0],
        "A user with that username already exists."
    );
    assert_eq!(
        json["error"]["fields"]["email"][0],
        "Enter a valid email address."
    );
}

#[tokio::test]
async fn test_unauthorized_returns_401_with_challenge_header() {
    let error = ApiError::unauthorized("NOT_AUTHENTICATED", "No credentials");
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers()[WWW_AUTHENTICATE], "Bearer");

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "NOT_AUTHENTICATED");
}

#[tokio::test]
async fn test_missing_credentials_maps_to_not_authenticated() {
    let error = ApiError::from(AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    });
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers()[WWW_AUTHENTICATE], "Bearer");

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "NOT_AUTHENTICATED");
    assert_eq!(
        json["error"]["message"],
        "Authentication credentials were not provided."
    );
}

#[tokio::test]
async fn test_internal_error_returns_500_without_details() {
    let error = ApiError::internal("disk I/O error on /var/lib/accounts.db");
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert!(
        !json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("accounts.db")
    );
}

#[test]
fn test_unique_violation_converts_to_field_validation() {
    let db_error = DbError::UniqueViolation {
        field: "email".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = db_error.into();

    match api_error {
        ApiError::Validation { errors, .. } => {
            assert_eq!(
                errors.messages("email"),
                ["A user with this email already exists.".to_string()]
            );
        }
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[test]
fn test_other_db_errors_convert_to_internal() {
    let db_error = DbError::Migration {
        message: "checksum mismatch".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = db_error.into();

    assert!(matches!(api_error, ApiError::Internal { .. }));
}

#[test]
fn test_core_validation_converts_to_api_validation() {
    let core_error = CoreError::Validation {
        errors: FieldErrors::single("password", "This field is required."),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = core_error.into();

    assert_eq!(api_error.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_auth_error_keeps_its_code() {
    let auth_error = AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = auth_error.into();

    match api_error {
        ApiError::Unauthorized { code, .. } => assert_eq!(code, "TOKEN_EXPIRED"),
        other => panic!("Expected Unauthorized, got {:?}", other),
    }
}
