use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, ConfigSection,
    DEFAULT_CONFIG_DIR_NAME, DatabaseConfig, LoggingConfig, ServerConfig,
};

use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for ACCT_CONFIG_DIR env var, else use ./.accounts/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply ACCT_* environment variable overrides; a value that does
    ///    not parse is an error rather than silently ignored
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides()?;

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: ACCT_CONFIG_DIR env var > ./.accounts/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::invalid(ConfigSection::Environment, "cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let config_dir = Self::config_dir()?;

        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&config_dir)?;

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get absolute path to the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(file) = &self.logging.file else {
            return Ok(None);
        };

        let config_dir = Self::config_dir()?;
        Ok(Some(config_dir.join(&self.logging.dir).join(file)))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  auth: {} (leeway {}s)",
            self.auth.algorithm_name(),
            self.auth.leeway_secs
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) -> ConfigErrorResult<()> {
        // Server
        Self::apply_env_string("ACCT_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("ACCT_SERVER_PORT", &mut self.server.port)?;

        // Database
        Self::apply_env_string("ACCT_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "ACCT_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        )?;

        // Auth
        Self::apply_env_option_string("ACCT_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_option_string(
            "ACCT_AUTH_JWT_PUBLIC_KEY_PATH",
            &mut self.auth.jwt_public_key_path,
        );
        Self::apply_env_parse("ACCT_AUTH_LEEWAY_SECS", &mut self.auth.leeway_secs)?;

        // Logging (level parsing is lenient and falls back to info)
        Self::apply_env_parse("ACCT_LOG_LEVEL", &mut self.logging.level)?;
        Self::apply_env_bool("ACCT_LOG_COLORED", &mut self.logging.colored)?;
        Self::apply_env_option_string("ACCT_LOG_FILE", &mut self.logging.file);

        Ok(())
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1" and "false"/"0"
    #[track_caller]
    fn apply_env_bool(var_name: &'static str, target: &mut bool) -> ConfigErrorResult<()> {
        if let Ok(val) = std::env::var(var_name) {
            *target = match val.trim() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => return Err(Self::env_override_error(var_name, val)),
            };
        }
        Ok(())
    }

    #[track_caller]
    fn apply_env_parse<T: std::str::FromStr>(
        var_name: &'static str,
        target: &mut T,
    ) -> ConfigErrorResult<()> {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| Self::env_override_error(var_name, val.clone()))?;
        }
        Ok(())
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    #[track_caller]
    fn env_override_error(name: &'static str, value: String) -> ConfigError {
        ConfigError::EnvOverride {
            name,
            value,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
