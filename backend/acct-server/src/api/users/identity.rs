//! The one path by which identities are created or changed.
//!
//! Registration and the users API both come through here, so every password
//! is hashed by [`PasswordHash::from_plaintext`] and every username and email
//! is checked for uniqueness the same way.

use crate::{ApiError, ApiResult, CreateUserRequest, UpdateUserRequest};

use acct_core::validation::user_validator::{DUPLICATE_EMAIL, DUPLICATE_USERNAME};
use acct_core::{NewUser, PasswordHash, Presence, User, UserChanges, UserValidator};
use acct_db::UserRepository;

/// Validate, hash and insert a new identity
pub async fn create_identity(
    users: &UserRepository,
    request: CreateUserRequest,
) -> ApiResult<User> {
    let mut validator = UserValidator::new();

    let username = validator.username(request.username, Presence::Required);
    let email = validator.email(request.email, Presence::Required);
    let password = validator.password(request.password, Presence::Required);
    let first_name = validator.first_name(request.first_name);
    let last_name = validator.last_name(request.last_name);

    check_unique(
        users,
        &mut validator,
        username.as_deref(),
        email.as_deref(),
        None,
    )
    .await?;
    validator.finish()?;

    let (Some(username), Some(email), Some(password)) = (username, email, password) else {
        return Err(ApiError::internal(
            "required fields missing after successful validation",
        ));
    };

    let password_hash = PasswordHash::from_plaintext(&password)?;
    let new_user = NewUser::new(
        username,
        email,
        password_hash,
        first_name.unwrap_or_default(),
        last_name.unwrap_or_default(),
    );

    Ok(users.create(&new_user).await?)
}

/// Validate and apply changes to identity `id`.
///
/// `presence` is `Required` for PUT and `Optional` for PATCH. Nothing is
/// written unless every field passes, and a request that changes nothing
/// returns the stored identity as is.
pub async fn update_identity(
    users: &UserRepository,
    id: i64,
    request: UpdateUserRequest,
    presence: Presence,
) -> ApiResult<User> {
    let Some(current) = users.find_by_id(id).await? else {
        return Err(not_found(id));
    };

    let mut validator = UserValidator::new();

    let username = validator.username(request.username, presence);
    let email = validator.email(request.email, presence);
    let password = validator.password(request.password, Presence::Optional);
    let first_name = validator.first_name(request.first_name);
    let last_name = validator.last_name(request.last_name);

    check_unique(
        users,
        &mut validator,
        username.as_deref(),
        email.as_deref(),
        Some(id),
    )
    .await?;
    validator.finish()?;

    let password_hash = password
        .map(|p| PasswordHash::from_plaintext(&p))
        .transpose()?;

    let changes = UserChanges {
        username,
        email,
        first_name,
        last_name,
        password_hash,
    };
    if changes.is_empty() {
        return Ok(current);
    }

    users
        .update(id, &changes)
        .await?
        .ok_or_else(|| not_found(id))
}

#[track_caller]
pub fn not_found(id: impl std::fmt::Display) -> ApiError {
    ApiError::not_found(format!("User {} not found", id))
}

/// Record duplicate username/email against identities other than `exclude_id`.
/// Fields that already failed format checks are skipped.
async fn check_unique(
    users: &UserRepository,
    validator: &mut UserValidator,
    username: Option<&str>,
    email: Option<&str>,
    exclude_id: Option<i64>,
) -> ApiResult<()> {
    if let Some(username) = username
        && users.username_taken(username, exclude_id).await?
    {
        validator.reject("username", DUPLICATE_USERNAME);
    }

    if let Some(email) = email
        && users.email_taken(email, exclude_id).await?
    {
        validator.reject("email", DUPLICATE_EMAIL);
    }

    Ok(())
}
