use crate::{Claims, Result as AuthErrorResult};

/// Identity extracted from a verified token.
/// The user it names may no longer exist; callers look it up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: i64,
}

impl AuthContext {
    #[track_caller]
    pub fn from_claims(claims: &Claims) -> AuthErrorResult<Self> {
        Ok(Self {
            user_id: claims.user_id()?,
        })
    }
}
