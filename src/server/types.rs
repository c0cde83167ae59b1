//! Server types for health reporting

use crate::storage::StorageHealthStatus;
use serde::{Deserialize, Serialize};

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `healthy` or `degraded`
    pub status: String,
    /// RFC 3339 timestamp
    pub timestamp: String,
    /// Crate version
    pub version: String,
    /// Storage health
    pub storage: StorageHealthStatus,
    /// Worker pool occupancy
    pub workers: WorkerPoolStatus,
}

/// Worker pool occupancy snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerPoolStatus {
    /// Total slots
    pub capacity: usize,
    /// Free slots
    pub available: usize,
    /// Whether the pool still accepts work
    pub accepting: bool,
}
