//! The authenticated caller, as resolved by the `authenticate` middleware

use crate::ApiError;

use acct_auth::AuthError;
use acct_core::{ErrorLocation, User};

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};

/// The identity named by a verified bearer token.
///
/// Inserted into request extensions by `authenticate`; extracting it on a
/// request without one is a 401.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            parts
                .extensions
                .get::<CurrentUser>()
                .cloned()
                .ok_or_else(|| {
                    ApiError::from(AuthError::MissingHeader {
                        location: ErrorLocation::from(Location::caller()),
                    })
                })
        }
    }
}
