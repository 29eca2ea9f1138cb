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
    /// Uses `~/.config/folio/config.toml` on Unix/macOS, or the equivalent
    /// on other platforms via `dirs::config_dir()`. Falls back to the
    /// current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("folio").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = Self::parse(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Parses TOML without validating.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The rotation interval is non-zero
    /// - The chat base URL is http(s)
    /// - `max_tokens` is positive and `temperature` lies in `[0, 2]`
    /// - The chat request timeout is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rotation.interval_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "rotation.interval_ms must be greater than zero".to_string(),
            });
        }

        let base_url = &self.chat.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("chat.base_url '{}' must start with http:// or https://", base_url),
            });
        }

        if self.chat.max_tokens == 0 {
            return Err(ConfigError::ValidationError {
                message: "chat.max_tokens must be greater than zero".to_string(),
            });
        }

        if !(0.0..=2.0).contains(&self.chat.temperature) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "chat.temperature {} is outside the range 0.0..=2.0",
                    self.chat.temperature
                ),
            });
        }

        if self.chat.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "chat.timeout_seconds must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
