#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Logging utilities for the Zabbix client.
//!
//! Library code only emits [`tracing`] events. Installing a subscriber is
//! left to the application, which may call [`init`] to get a formatted
//! subscriber configured from [`LoggingConfig`].

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors that can occur while installing the subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The level directive could not be parsed
    #[error("Invalid log level directive: {0}")]
    InvalidLevel(String),
    /// The log file could not be opened for appending
    #[error("Failed to open log file: {0}")]
    LogFile(#[from] std::io::Error),
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level or filter directive (`info`, `debug`, `zabbix_http=trace`, ...)
    pub level: String,
    /// Log file path (optional); stderr when unset
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self { Self { level: "info".to_string(), file: None } }
}

/// Emits a trace event tagged with the calling module.
pub fn trace(module: &str, msg: &str) {
    tracing::trace!(module = module, "{}", msg);
}

/// Installs a global fmt subscriber.
///
/// `RUST_LOG`, when set, takes precedence over `config.level`. Returns
/// `Ok(false)` without touching anything if a global subscriber is already
/// installed.
pub fn init(config: &LoggingConfig) -> Result<bool, LoggingError> {
    let filter = build_filter(std::env::var("RUST_LOG").ok(), &config.level)?;

    let installed = match &config.file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
    };
    Ok(installed.is_ok())
}

/// Internal function for testing - allows injection of the environment value
fn build_filter(env: Option<String>, level: &str) -> Result<EnvFilter, LoggingError> {
    if let Some(directives) = env.filter(|d| !d.trim().is_empty()) {
        if let Ok(filter) = EnvFilter::try_new(&directives) {
            return Ok(filter);
        }
    }
    EnvFilter::try_new(level).map_err(|e| LoggingError::InvalidLevel(format!("{}: {}", level, e)))
}
