//! Stored password credential.
//!
//! A `PasswordHash` can only be produced by hashing a plaintext password
//! (or by reading back a value that was hashed earlier), so every code path
//! that creates or replaces a credential goes through Argon2id.

use crate::{CoreError, ErrorLocation, Result as CoreErrorResult};

use std::fmt;
use std::panic::Location;

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash as PhcString, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

/// Argon2id hash in PHC string format
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hash a plaintext password with a fresh random salt
    #[track_caller]
    pub fn from_plaintext(password: &str) -> CoreErrorResult<Self> {
        let location = ErrorLocation::from(Location::caller());
        let salt = SaltString::generate(&mut OsRng);

        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| CoreError::PasswordHash {
                message: e.to_string(),
                location,
            })?;

        Ok(Self(hash.to_string()))
    }

    /// Wrap a PHC string previously produced by [`PasswordHash::from_plaintext`]
    pub fn from_phc(phc: impl Into<String>) -> Self {
        Self(phc.into())
    }

    /// Check a plaintext password against this hash.
    /// A malformed stored hash never verifies.
    pub fn verify(&self, password: &str) -> bool {
        match PhcString::new(&self.0) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}
