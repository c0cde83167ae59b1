//! Configuration loading utilities
//!
//! This module provides utilities for loading configuration from various sources.

use super::models::*;
use crate::utils::error::{Result, ServiceError};
use std::env;
use tracing::{debug, warn};

/// Environment variable prefix for service settings
pub const ENV_PREFIX: &str = "ITEM_SERVICE_";

fn env_var(name: &str) -> Option<String> {
    env::var(format!("{}{}", ENV_PREFIX, name)).ok()
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| ServiceError::Config(format!("Invalid {}{}: {}", ENV_PREFIX, name, e)))
}

impl ServiceConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment variables");

        let mut config = Self::default();

        // Server configuration
        if let Some(host) = env_var("HOST") {
            config.server.host = host;
        }
        if let Some(port) = env_var("PORT") {
            config.server.port = parse_env("PORT", &port)?;
        }
        if let Some(workers) = env_var("HTTP_WORKERS") {
            config.server.workers = Some(parse_env("HTTP_WORKERS", &workers)?);
        }
        if let Some(timeout) = env_var("TIMEOUT") {
            config.server.timeout = parse_env("TIMEOUT", &timeout)?;
        }

        // Storage configuration
        if let Some(backend) = env_var("STORAGE") {
            config.storage.backend = backend.parse().map_err(ServiceError::Config)?;
        }
        if let Ok(db_url) = env::var("DATABASE_URL") {
            config.storage.database.url = db_url;
            config.storage.backend = StorageBackend::Database;
        }
        if let Some(max_conn) = env_var("DATABASE_MAX_CONNECTIONS") {
            config.storage.database.max_connections =
                parse_env("DATABASE_MAX_CONNECTIONS", &max_conn)?;
        }

        // Processing configuration
        if let Some(pool_size) = env_var("WORKERS") {
            config.processing.pool_size = parse_env("WORKERS", &pool_size)?;
        }
        if let Some(delay) = env_var("PROCESSING_DELAY_MS") {
            config.processing.delay_ms = parse_env("PROCESSING_DELAY_MS", &delay)?;
        }
        if let Some(status) = env_var("PROCESSED_STATUS") {
            config.processing.processed_status = status;
        }
        if let Some(timeout) = env_var("BATCH_TIMEOUT_SECS") {
            config.processing.batch_timeout_secs = Some(parse_env("BATCH_TIMEOUT_SECS", &timeout)?);
        }

        // Logging configuration
        if let Some(level) = env_var("LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(json) = env_var("LOG_JSON") {
            config.logging.json = parse_env("LOG_JSON", &json)?;
        }

        debug!("Configuration loaded from environment variables");
        Ok(config)
    }
}

/// Merge configuration from multiple sources
pub fn merge_configs(base: ServiceConfig, overrides: Vec<ServiceConfig>) -> ServiceConfig {
    overrides.into_iter().fold(base, |acc, config| acc.merge(config))
}

/// Load configuration with precedence: defaults -> file -> env
pub async fn load_config_with_precedence(
    config_file: Option<&str>,
    env_override: bool,
) -> Result<ServiceConfig> {
    let mut configs = Vec::new();

    if let Some(file_path) = config_file {
        match tokio::fs::read_to_string(file_path).await {
            Ok(content) => {
                let file_config: ServiceConfig = serde_yaml::from_str(&expand_env_vars(&content))
                    .map_err(|e| {
                        ServiceError::Config(format!("Failed to parse config file: {}", e))
                    })?;
                configs.push(file_config);
                debug!("Loaded configuration from file: {}", file_path);
            }
            Err(e) => {
                warn!("Failed to load config file {}: {}", file_path, e);
            }
        }
    }

    if env_override {
        configs.push(ServiceConfig::from_env()?);
    }

    Ok(merge_configs(ServiceConfig::default(), configs))
}

/// Expand `${VAR_NAME}` references in configuration strings
///
/// Unknown variables are left untouched.
pub fn expand_env_vars(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                match env::var(name) {
                    Ok(value) => result.push_str(&value),
                    Err(_) => {
                        result.push_str("${");
                        result.push_str(name);
                        result.push('}');
                    }
                }
                rest = &after[end + 1..];
            }
            None => {
                result.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    result.push_str(rest);
    result
}
