//! Bearer-token authentication, as two middleware composed in order:
//! [`authenticate`] resolves the caller, [`require_authenticated`] rejects
//! requests that have none.

use crate::api::error::USER_NOT_FOUND;
use crate::{ApiError, AppState, CurrentUser};

use acct_auth::{AuthError, bearer_token};
use acct_core::ErrorLocation;

use std::panic::Location;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use log::debug;

/// Resolve the `Authorization` header to a [`CurrentUser`].
///
/// No header passes through anonymously. A header that is present but
/// unusable is a 401, as is a valid token whose user no longer exists.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let context = match request.headers().get(AUTHORIZATION) {
        None => None,
        Some(value) => {
            let value = value.to_str().map_err(|_| AuthError::InvalidScheme {
                location: ErrorLocation::from(Location::caller()),
            })?;
            let token = bearer_token(value)?;
            Some(state.token_verifier.verify(token)?)
        }
    };

    if let Some(context) = context {
        let user = state
            .users
            .find_by_id(context.user_id)
            .await?
            .ok_or_else(|| ApiError::unauthorized(USER_NOT_FOUND, "User not found"))?;

        debug!("Authenticated user {} ({})", user.id, user.username);
        request.extensions_mut().insert(CurrentUser(user));
    }

    Ok(next.run(request).await)
}

/// Binary authorization: any authenticated caller may proceed
pub async fn require_authenticated(request: Request, next: Next) -> Result<Response, ApiError> {
    if request.extensions().get::<CurrentUser>().is_none() {
        return Err(AuthError::MissingHeader {
            location: ErrorLocation::from(Location::caller()),
        }
        .into());
    }

    Ok(next.run(request).await)
}
