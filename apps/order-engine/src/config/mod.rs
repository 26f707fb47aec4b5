//! Configuration module for the order engine.
//!
//! Provides configuration loading from YAML with serde defaults and
//! environment variable overrides for deployment-specific values.
//!
//! # Usage
//!
//! ```rust,ignore
//! use order_engine::config::load_config;
//!
//! // Load from default path (config.yaml), falling back to defaults
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("custom/config.yaml"))?;
//! ```

mod dispatch;
mod ordering;
mod persistence;
mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use dispatch::DispatchConfig;
pub use ordering::OrderingConfig;
pub use persistence::PersistenceConfig;
pub use server::ServerConfig;

/// Default configuration file path.
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// B2B ordering endpoint settings.
    #[serde(default)]
    pub ordering: OrderingConfig,
    /// Database settings.
    #[serde(default)]
    pub persistence: PersistenceConfig,
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Dispatch coordinator settings.
    #[serde(default)]
    pub dispatch: DispatchConfig,
}

impl Config {
    /// Validate the configuration for startup.
    ///
    /// # Errors
    ///
    /// Returns error if a required value is missing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ordering.endpoint_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "ordering.endpoint_url is required (or set NBN_B2B_ENDPOINT)".to_string(),
            ));
        }
        if self.persistence.database_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "persistence.database_url is required (or set DATABASE_URL)".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply environment variable overrides for deployment values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            self.persistence.database_url = url;
        }
        if let Ok(url) = std::env::var("NBN_B2B_ENDPOINT") {
            self.ordering.endpoint_url = url;
        }
        if let Ok(port) = std::env::var("HTTP_PORT") {
            if let Ok(port) = port.parse() {
                self.server.http_port = port;
            }
        }
    }
}

/// Load configuration from a YAML file.
///
/// With an explicit path the file must exist. With `None`, the default
/// `config.yaml` is read when present and built-in defaults are used
/// otherwise. Environment overrides are applied in both cases.
///
/// # Errors
///
/// Returns error if an explicitly named file cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(path) => parse_file(path)?,
        None => {
            if std::path::Path::new(DEFAULT_CONFIG_PATH).exists() {
                parse_file(DEFAULT_CONFIG_PATH)?
            } else {
                Config::default()
            }
        }
    };

    config.apply_env_overrides();
    Ok(config)
}

fn parse_file(path: &str) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_string(),
        source,
    })?;
    Ok(serde_yaml_bw::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_fails_validation() {
        let config = Config::default();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn populated_config_validates() {
        let config = Config {
            ordering: OrderingConfig {
                endpoint_url: "https://b2b.nbn.example/orders".to_string(),
                ..Default::default()
            },
            persistence: PersistenceConfig {
                database_url: "postgres://localhost/orders".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parses_partial_yaml_with_defaults() {
        let yaml = r"
ordering:
  endpoint_url: https://b2b.nbn.example/orders
dispatch:
  scheduler_enabled: true
";
        let config: Config = serde_yaml_bw::from_str(yaml).unwrap();
        assert_eq!(config.ordering.endpoint_url, "https://b2b.nbn.example/orders");
        assert_eq!(config.ordering.timeout_secs, 30);
        assert!(config.dispatch.scheduler_enabled);
        assert_eq!(config.dispatch.interval_secs, 300);
        assert_eq!(config.server.http_port, 8080);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        assert!(matches!(
            load_config(Some("does-not-exist.yaml")),
            Err(ConfigError::ReadError { .. })
        ));
    }
}
