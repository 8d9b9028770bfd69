use crate::{AuthContext, AuthError, Claims, JwtAlgorithm, Result as AuthErrorResult, TokenVerifier};

use acct_core::ErrorLocation;

use std::panic::Location;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use log::debug;

/// Clock skew tolerance applied to `exp` and `nbf`
pub const DEFAULT_LEEWAY_SECS: u64 = 30;

/// Verifies access tokens minted by the external token service
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
    algorithm: Algorithm,
}

impl JwtValidator {
    /// Create validator with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8]) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation: validation_for(Algorithm::HS256),
            algorithm: Algorithm::HS256,
        }
    }

    /// Create validator with RS256 (asymmetric public key)
    #[track_caller]
    pub fn with_rs256(public_key_pem: &str) -> AuthErrorResult<Self> {
        let decoding_key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes()).map_err(|e| {
            AuthError::InvalidToken {
                message: format!("Invalid RSA public key: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Ok(Self {
            decoding_key,
            validation: validation_for(Algorithm::RS256),
            algorithm: Algorithm::RS256,
        })
    }

    #[track_caller]
    pub fn from_algorithm(algorithm: &JwtAlgorithm) -> AuthErrorResult<Self> {
        match algorithm {
            JwtAlgorithm::HS256 { secret } => Ok(Self::with_hs256(secret)),
            JwtAlgorithm::RS256 { public_key_pem } => Self::with_rs256(public_key_pem),
        }
    }

    pub fn with_leeway(mut self, leeway_secs: u64) -> Self {
        self.validation.leeway = leeway_secs;
        self
    }

    /// Validate JWT token and return claims
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }

    /// Get the algorithm being used (for logging/debugging)
    pub fn algorithm(&self) -> &str {
        match self.algorithm {
            Algorithm::HS256 => "HS256",
            Algorithm::RS256 => "RS256",
            _ => "unknown",
        }
    }
}

impl TokenVerifier for JwtValidator {
    fn verify(&self, token: &str) -> AuthErrorResult<AuthContext> {
        let claims = self.validate(token)?;
        let context = AuthContext::from_claims(&claims)?;
        debug!("Verified {} token for user {}", self.algorithm(), context.user_id);
        Ok(context)
    }
}

fn validation_for(algorithm: Algorithm) -> Validation {
    let mut validation = Validation::new(algorithm);
    validation.validate_exp = true;
    validation.validate_nbf = true;
    validation.leeway = DEFAULT_LEEWAY_SECS;
    validation
}
