//! Logging setup
//!
//! Installs the global `tracing` subscriber from the logging configuration.
//! `RUST_LOG` takes precedence over the configured level when set.

use crate::config::LoggingConfig;
use crate::utils::error::{Result, ServiceError};
use tracing_subscriber::EnvFilter;

/// Build the env filter for the configured level
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level)
        .map_err(|e| ServiceError::config(format!("Invalid log level '{}': {}", config.level, e)))
}

/// Initialize the global tracing subscriber
///
/// Calling this twice is harmless: the second installation attempt is ignored.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;

    let installed = if config.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_current_span(false)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(config.thread_ids)
            .try_init()
    };

    if installed.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }

    Ok(())
}
