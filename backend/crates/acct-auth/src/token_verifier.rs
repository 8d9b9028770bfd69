use crate::{AuthContext, Result as AuthErrorResult};

/// Turns a bearer token into an identity.
///
/// Object-safe so the server can hold `Arc<dyn TokenVerifier>` and tests can
/// swap in their own signing setup.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> AuthErrorResult<AuthContext>;
}
