/// Key material for verifying access tokens, one variant per signing scheme
#[derive(Clone)]
pub enum JwtAlgorithm {
    /// Shared secret (HS256)
    HS256 { secret: Vec<u8> },
    /// PEM-encoded RSA public key (RS256)
    RS256 { public_key_pem: String },
}

impl JwtAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Self::HS256 { .. } => "HS256",
            Self::RS256 { .. } => "RS256",
        }
    }
}

/// Names the scheme only; key material stays out of logs
impl std::fmt::Debug for JwtAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JwtAlgorithm({})", self.name())
    }
}
