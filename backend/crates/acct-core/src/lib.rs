pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::password_hash::PasswordHash;
pub use models::user::{NewUser, User, UserChanges};
pub use validation::email::{is_valid_email, normalize_email};
pub use validation::field_errors::FieldErrors;
pub use validation::field_input::FieldInput;
pub use validation::presence::Presence;
pub use validation::user_validator::UserValidator;

/// Maximum length of `username`, `first_name` and `last_name`.
pub const MAX_NAME_LENGTH: usize = 150;
/// Maximum length of an email address (RFC 5321 path limit).
pub const MAX_EMAIL_LENGTH: usize = 254;
/// Maximum length of the local part of an email address.
pub const MAX_EMAIL_LOCAL_LENGTH: usize = 64;
