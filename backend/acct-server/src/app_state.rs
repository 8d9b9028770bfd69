use acct_auth::TokenVerifier;
use acct_db::UserRepository;

use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub users: UserRepository,
    pub token_verifier: Arc<dyn TokenVerifier>,
}

impl AppState {
    pub fn new(users: UserRepository, token_verifier: Arc<dyn TokenVerifier>) -> Self {
        Self {
            users,
            token_verifier,
        }
    }
}
