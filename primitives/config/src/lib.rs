#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Zabbix client configuration
//!
//! Loads and saves the settings an application needs to talk to a Zabbix
//! server:
//! - API endpoint, credentials or session token, request timeout
//! - Logging level and destination
//!
//! Configuration is stored in TOML format. Environment variables
//! (`ZABBIX_URL`, `ZABBIX_USER`, `ZABBIX_PASSWORD`, `ZABBIX_TOKEN`,
//! `ZABBIX_TIMEOUT_MS`) override file values through [`Config::apply_env`].

use std::path::{Path, PathBuf};

pub use logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
pub use transport::{AuthConfig, TransportConfig};

/// Errors that can occur when loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    /// Failed to parse the TOML configuration file
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize configuration to TOML format
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Configuration file was not found at the specified path
    #[error("Config file not found at: {0}")]
    NotFound(PathBuf),
    /// Could not locate the user's configuration directory
    #[error("Could not find user config directory")]
    ConfigDirUnavailable,
    /// An environment override held an unusable value
    #[error("Invalid value for {name}: {value}")]
    InvalidEnv {
        /// Variable name
        name: &'static str,
        /// Offending value
        value: String,
    },
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// API connection settings
    #[serde(default)]
    pub transport: TransportConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save this configuration as a pretty-printed TOML file at `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Returns the default config file path:
    /// `{config_dir()}/zabbix/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::ConfigDirUnavailable)?.join("zabbix");
        Ok(config_dir.join("config.toml"))
    }

    /// Load from `path`, or from [`Config::default_path`] when `None`.
    ///
    /// A missing file yields the defaults; any other failure is returned.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path()?,
        };
        match Self::load_existing(&path) {
            Err(ConfigError::NotFound(_)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Load from `path`, failing with [`ConfigError::NotFound`] if it does not exist
    pub fn load_existing(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        Self::from_file(path)
    }

    /// Apply `ZABBIX_*` environment overrides
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_internal(|name| std::env::var(name).ok())
    }

    /// Internal function for testing - allows injection of environment values
    fn apply_env_internal<F>(&mut self, var: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = var("ZABBIX_URL") {
            self.transport.endpoint = url;
        }
        if let Some(timeout) = var("ZABBIX_TIMEOUT_MS") {
            self.transport.timeout_ms = timeout
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidEnv { name: "ZABBIX_TIMEOUT_MS", value: timeout })?;
        }

        let user = var("ZABBIX_USER");
        let password = var("ZABBIX_PASSWORD");
        let token = var("ZABBIX_TOKEN");
        if user.is_some() || password.is_some() || token.is_some() {
            let auth = self.transport.auth.get_or_insert_with(AuthConfig::default);
            if user.is_some() {
                auth.username = user;
            }
            if password.is_some() {
                auth.password = password;
            }
            if token.is_some() {
                auth.token = token;
            }
        }
        Ok(())
    }
}
