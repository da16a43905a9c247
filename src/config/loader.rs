use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/walletview/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("walletview").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The helper domain is an http(s) URL
    /// - The fallback currency is a three-letter code
    /// - Timeouts, poll interval and queue capacity are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let domain = &self.defaults.wallet_helper_domain;
        if !(domain.starts_with("https://") || domain.starts_with("http://")) {
            return Err(ConfigError::ValidationError {
                message: format!("wallet_helper_domain '{}' is not an http(s) URL", domain),
            });
        }

        let currency = &self.defaults.currency;
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ConfigError::ValidationError {
                message: format!("currency '{}' is not a three-letter code", currency),
            });
        }

        let analytics = &self.analytics;
        if analytics.user_data_timeout_ms == 0 || analytics.user_data_poll_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "analytics timeouts must be greater than zero".to_string(),
            });
        }

        if analytics.channel_capacity == 0 {
            return Err(ConfigError::ValidationError {
                message: "analytics channel_capacity must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
