use std::collections::HashSet;
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
    /// Uses `~/.config/action-loaders/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("action-loaders").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise behaves like [`Config::load_from`].
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads, parses and validates the configuration at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
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
    /// - Store capacity and settle timeout are non-zero
    /// - Seed users have unique ids and non-blank usernames
    /// - `first_user_id` does not collide with any seed user
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.action_capacity == 0 {
            return Err(ConfigError::ValidationError {
                message: "store.action_capacity must be greater than zero".to_string(),
            });
        }

        if self.store.settle_timeout_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "store.settle_timeout_ms must be greater than zero".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for user in &self.demo.seed_users {
            if user.username.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: format!("Seed user {} has a blank username", user.id),
                });
            }
            if !seen.insert(user.id) {
                return Err(ConfigError::ValidationError {
                    message: format!("Seed user id {} is used more than once", user.id),
                });
            }
        }

        if let Some(max) = seen.iter().max() {
            if self.demo.first_user_id <= *max {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "demo.first_user_id ({}) must be greater than every seed user id (max {})",
                        self.demo.first_user_id, max
                    ),
                });
            }
        }

        Ok(())
    }
}
