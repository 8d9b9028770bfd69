#![allow(dead_code)]

//! Test infrastructure for acct-server API tests

use acct_auth::JwtValidator;
use acct_core::{NewUser, PasswordHash, User};
use acct_db::{Database, UserRepository};
use acct_server::AppState;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Value, json};

pub const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";
pub const TEST_PASSWORD: &str = "securepassword";

/// AppState over a private in-memory database and an HS256 verifier
pub async fn create_test_app_state() -> AppState {
    let pool = Database::open_in_memory()
        .await
        .expect("Failed to create test database");

    AppState::new(
        UserRepository::new(pool),
        Arc::new(JwtValidator::with_hs256(TEST_SECRET)),
    )
}

/// Insert a user directly through the repository
pub async fn create_test_user(state: &AppState, username: &str) -> User {
    let new_user = NewUser::new(
        username.to_string(),
        format!("{}@example.com", username),
        PasswordHash::from_plaintext(TEST_PASSWORD).expect("Failed to hash password"),
        String::new(),
        String::new(),
    );

    state
        .users
        .create(&new_user)
        .await
        .expect("Failed to create test user")
}

/// Sign arbitrary claims with the test secret
pub fn mint_token_with_claims(claims: &Value) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .expect("Failed to sign token")
}

/// A valid access token for `user_id`, good for an hour
pub fn mint_token(user_id: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    mint_token_with_claims(&json!({
        "sub": user_id.to_string(),
        "iat": now,
        "exp": now + 3600,
        "token_type": "access",
    }))
}

/// Build a request, optionally with a bearer token and a JSON body
pub fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Collect a response body as JSON
pub async fn read_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
