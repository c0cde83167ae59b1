//! Configuration data models
//!
//! This module defines all configuration structures used throughout the service.

#![allow(missing_docs)]

pub mod logging;
pub mod processing;
pub mod server;
pub mod service;
pub mod storage;

// Re-export all configuration types
pub use logging::*;
pub use processing::*;
pub use server::*;
pub use service::*;
pub use storage::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default request timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    1024 * 1024 // 1MB
}

pub fn default_max_connections() -> u32 {
    10
}

pub fn default_connection_timeout() -> u64 {
    5
}

/// Default number of concurrent batch workers
pub fn default_pool_size() -> usize {
    10
}

/// Default simulated work per record in milliseconds
pub fn default_processing_delay_ms() -> u64 {
    100
}

/// Default status written by the batch processor
pub fn default_processed_status() -> String {
    crate::core::models::item::STATUS_PROCESSED.to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_true() -> bool {
    true
}
