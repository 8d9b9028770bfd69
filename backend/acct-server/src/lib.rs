pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod token;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_user::CurrentUser,
    middleware::authenticate::{authenticate, require_authenticated},
    register::register::register,
    users::{
        create_user_request::CreateUserRequest,
        update_user_request::UpdateUserRequest,
        user_dto::UserDto,
        users::{create_user, delete_user, get_user, list_users, me, replace_user, update_user},
    },
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;
pub use crate::token::token_verifier_from_config;
