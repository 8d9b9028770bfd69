use std::fmt;
use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

/// The part of the configuration an [`ConfigError::Invalid`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Server,
    Database,
    Auth,
    Environment,
}

impl fmt::Display for ConfigSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Server => "server",
            Self::Database => "database",
            Self::Auth => "auth",
            Self::Environment => "environment",
        })
    }
}

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("Invalid [{section}] config: {message} {location}")]
    Invalid {
        section: ConfigSection,
        message: String,
        location: ErrorLocation,
    },

    #[error("{name}={value:?} is not a valid value {location}")]
    EnvOverride {
        name: &'static str,
        value: String,
        location: ErrorLocation,
    },

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn invalid(section: ConfigSection, message: impl Into<String>) -> Self {
        ConfigError::Invalid {
            section,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The section at fault, for validation failures
    pub fn section(&self) -> Option<ConfigSection> {
        match self {
            ConfigError::Invalid { section, .. } => Some(*section),
            _ => None,
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
