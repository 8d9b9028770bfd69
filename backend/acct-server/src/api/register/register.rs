//! Self-service registration; the only unauthenticated write.

use crate::api::users::identity::create_identity;
use crate::{ApiResult, AppState, CreateUserRequest, UserDto};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use log::info;

/// POST /register/
pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserDto>)> {
    let Json(request) = body?;

    let user = create_identity(&state.users, request).await?;
    info!("Registered user {} ({})", user.id, user.username);

    Ok((StatusCode::CREATED, Json(user.into())))
}
