//! User resource handlers. Every route here sits behind bearer authentication.

use crate::api::users::identity::{create_identity, not_found, update_identity};
use crate::{ApiResult, AppState, CreateUserRequest, CurrentUser, UpdateUserRequest, UserDto};

use acct_core::Presence;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use log::info;

// =============================================================================
// Handlers
// =============================================================================

/// GET /users/
///
/// All identities, ordered by id
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserDto>>> {
    let users = state.users.find_all().await?;

    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// GET /users/me/
pub async fn me(CurrentUser(user): CurrentUser) -> Json<UserDto> {
    Json(user.into())
}

/// GET /users/{id}/
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserDto>> {
    let user_id = parse_user_id(&id)?;

    let user = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| not_found(&id))?;

    Ok(Json(user.into()))
}

/// POST /users/
pub async fn create_user(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserDto>)> {
    let Json(request) = body?;

    let user = create_identity(&state.users, request).await?;
    info!(
        "User {} created user {} ({})",
        caller.id, user.id, user.username
    );

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// PUT /users/{id}/
///
/// Full update: `username` and `email` are required
pub async fn replace_user(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    Path(id): Path<String>,
    body: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> ApiResult<Json<UserDto>> {
    let user_id = parse_user_id(&id)?;
    let Json(request) = body?;

    let user = update_identity(&state.users, user_id, request, Presence::Required).await?;
    info!("User {} replaced user {}", caller.id, user.id);

    Ok(Json(user.into()))
}

/// PATCH /users/{id}/
///
/// Partial update: absent fields are left unchanged
pub async fn update_user(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    Path(id): Path<String>,
    body: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> ApiResult<Json<UserDto>> {
    let user_id = parse_user_id(&id)?;
    let Json(request) = body?;

    let user = update_identity(&state.users, user_id, request, Presence::Optional).await?;
    info!("User {} updated user {}", caller.id, user.id);

    Ok(Json(user.into()))
}

/// DELETE /users/{id}/
pub async fn delete_user(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let user_id = parse_user_id(&id)?;

    if !state.users.delete(user_id).await? {
        return Err(not_found(&id));
    }
    info!("User {} deleted user {}", caller.id, user_id);

    Ok(StatusCode::NO_CONTENT)
}

/// Ids are integers; anything else cannot name an identity
#[track_caller]
fn parse_user_id(id: &str) -> ApiResult<i64> {
    id.parse::<i64>().map_err(|_| not_found(id))
}
