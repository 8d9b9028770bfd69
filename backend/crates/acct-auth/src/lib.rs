pub mod auth_context;
pub mod bearer;
pub mod claims;
pub mod error;
pub mod jwt_algorithm;
pub mod jwt_validator;
pub mod token_verifier;

pub use auth_context::AuthContext;
pub use bearer::bearer_token;
pub use claims::{ACCESS_TOKEN_TYPE, Claims};
pub use error::{AuthError, Result};
pub use jwt_algorithm::JwtAlgorithm;
pub use jwt_validator::{DEFAULT_LEEWAY_SECS, JwtValidator};
pub use token_verifier::TokenVerifier;
