use crate::error::{Result as ServerErrorResult, ServerError};

use acct_auth::{JwtAlgorithm, JwtValidator, TokenVerifier};
use acct_config::{Config, JwtKeySource};

use std::sync::Arc;

use log::info;

/// Build the bearer-token verifier from `[auth]`.
/// A shared secret selects HS256, a public key file RS256.
pub fn token_verifier_from_config(config: &Config) -> ServerErrorResult<Arc<dyn TokenVerifier>> {
    let config_dir = Config::config_dir()?;

    let algorithm = match config.auth.key_source(&config_dir) {
        Some(source) => jwt_algorithm(source)?,
        None => return Err(ServerError::MissingJwtKey),
    };

    let validator = JwtValidator::from_algorithm(&algorithm)?.with_leeway(config.auth.leeway_secs);
    info!(
        "JWT: {} authentication enabled (leeway {}s)",
        algorithm.name(),
        config.auth.leeway_secs
    );

    Ok(Arc::new(validator))
}

/// Load the key material a [`JwtKeySource`] points at
fn jwt_algorithm(source: JwtKeySource) -> ServerErrorResult<JwtAlgorithm> {
    match source {
        JwtKeySource::Secret(secret) => Ok(JwtAlgorithm::HS256 {
            secret: secret.into_bytes(),
        }),
        JwtKeySource::PublicKeyFile(path) => {
            let public_key_pem =
                std::fs::read_to_string(&path).map_err(|e| ServerError::JwtKeyFile {
                    path: path.display().to_string(),
                    source: e,
                })?;
            Ok(JwtAlgorithm::RS256 { public_key_pem })
        }
    }
}
