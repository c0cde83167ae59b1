//! Batch processing configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for the batch processor and its worker pool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Number of records processed concurrently
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,
    /// Simulated work per record, in milliseconds
    #[serde(default = "default_processing_delay_ms")]
    pub delay_ms: u64,
    /// Status label written to every processed record
    #[serde(default = "default_processed_status")]
    pub processed_status: String,
    /// Upper bound for one batch run, in whole seconds (unbounded when absent)
    #[serde(default)]
    pub batch_timeout_secs: Option<u64>,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            pool_size: default_pool_size(),
            delay_ms: default_processing_delay_ms(),
            processed_status: default_processed_status(),
            batch_timeout_secs: None,
        }
    }
}

impl ProcessingConfig {
    /// Set pool size
    pub fn with_pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = pool_size.max(1);
        self
    }

    /// Set per-record delay
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay_ms = delay.as_millis() as u64;
        self
    }

    /// Set the processed status label
    pub fn with_processed_status(mut self, status: impl Into<String>) -> Self {
        self.processed_status = status.into();
        self
    }

    /// Set the batch timeout
    ///
    /// Stored in whole seconds. Fractional durations round up, so the timeout
    /// is never shorter than requested and never zero.
    pub fn with_batch_timeout(mut self, timeout: Duration) -> Self {
        let secs = timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0);
        self.batch_timeout_secs = Some(secs.max(1));
        self
    }

    /// Per-record delay as a duration
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Batch timeout as a duration
    pub fn batch_timeout(&self) -> Option<Duration> {
        self.batch_timeout_secs.map(Duration::from_secs)
    }

    /// Merge processing configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.pool_size != default_pool_size() {
            self.pool_size = other.pool_size;
        }
        if other.delay_ms != default_processing_delay_ms() {
            self.delay_ms = other.delay_ms;
        }
        if other.processed_status != default_processed_status() {
            self.processed_status = other.processed_status;
        }
        if other.batch_timeout_secs.is_some() {
            self.batch_timeout_secs = other.batch_timeout_secs;
        }
        self
    }

    /// Validate processing configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.pool_size == 0 {
            return Err("Pool size cannot be 0".to_string());
        }
        if self.processed_status.trim().is_empty() {
            return Err("Processed status cannot be blank".to_string());
        }
        if self.batch_timeout_secs == Some(0) {
            return Err("Batch timeout cannot be 0".to_string());
        }
        Ok(())
    }
}
