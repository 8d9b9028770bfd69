use crate::{
    ConfigError, ConfigErrorResult, ConfigSection, DEFAULT_LEEWAY_SECS, MAX_LEEWAY_SECS, MIN_JWT_SECRET_LENGTH,
};

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 shared secret
    pub jwt_secret: Option<String>,
    /// RS256 public key (PEM), relative to the config directory
    pub jwt_public_key_path: Option<String>,
    /// Clock skew tolerance for `exp`/`nbf`
    pub leeway_secs: u64,
}

/// Where token signatures are checked against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JwtKeySource {
    Secret(String),
    PublicKeyFile(PathBuf),
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            jwt_public_key_path: None,
            leeway_secs: DEFAULT_LEEWAY_SECS,
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("jwt_public_key_path", &self.jwt_public_key_path)
            .field("leeway_secs", &self.leeway_secs)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        match (&self.jwt_secret, &self.jwt_public_key_path) {
            (None, None) => {
                return Err(ConfigError::invalid(ConfigSection::Auth, 
                    "auth.jwt_secret or auth.jwt_public_key_path must be set",
                ));
            }
            (Some(secret), _) if secret.len() < MIN_JWT_SECRET_LENGTH => {
                return Err(ConfigError::invalid(ConfigSection::Auth, format!(
                    "auth.jwt_secret must be at least {} characters",
                    MIN_JWT_SECRET_LENGTH
                )));
            }
            (None, Some(key_path)) => {
                if Path::new(key_path).is_absolute() || key_path.contains("..") {
                    return Err(ConfigError::invalid(ConfigSection::Auth, 
                        "auth.jwt_public_key_path must be relative and cannot contain '..'",
                    ));
                }

                let full_path = config_dir.join(key_path);
                if !full_path.exists() {
                    return Err(ConfigError::invalid(ConfigSection::Auth, format!(
                        "auth.jwt_public_key_path not found: {}",
                        full_path.display()
                    )));
                }
            }
            _ => {}
        }

        if self.leeway_secs > MAX_LEEWAY_SECS {
            return Err(ConfigError::invalid(ConfigSection::Auth, format!(
                "auth.leeway_secs must be <= {}, got {}",
                MAX_LEEWAY_SECS, self.leeway_secs
            )));
        }

        Ok(())
    }

    /// The configured key material. A secret wins over a key file.
    pub fn key_source(&self, config_dir: &Path) -> Option<JwtKeySource> {
        if let Some(secret) = &self.jwt_secret {
            return Some(JwtKeySource::Secret(secret.clone()));
        }

        self.jwt_public_key_path
            .as_ref()
            .map(|path| JwtKeySource::PublicKeyFile(config_dir.join(path)))
    }

    pub fn algorithm_name(&self) -> &'static str {
        if self.jwt_secret.is_some() {
            "HS256"
        } else if self.jwt_public_key_path.is_some() {
            "RS256"
        } else {
            "none"
        }
    }
}
