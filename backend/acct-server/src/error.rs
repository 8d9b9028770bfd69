use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] acct_config::ConfigError),

    #[error("Auth setup error: {0}")]
    Auth(#[from] acct_auth::AuthError),

    #[error("Failed to read JWT key file {path}: {source}")]
    JwtKeyFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No JWT key configured (set auth.jwt_secret or auth.jwt_public_key_path)")]
    MissingJwtKey,

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
