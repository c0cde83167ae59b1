//! Application state shared across HTTP handlers
//!
//! This module provides the AppState struct and its implementations.

use crate::config::Config;
use crate::services::ItemService;
use crate::storage::StorageLayer;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc so every actix worker sees the same storage
/// and the same worker pool.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Storage layer
    pub storage: Arc<StorageLayer>,
    /// Item service
    pub items: Arc<ItemService>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, storage: StorageLayer) -> Self {
        let items = ItemService::new(storage.repository(), config.processing());
        Self {
            config: Arc::new(config),
            storage: Arc::new(storage),
            items: Arc::new(items),
        }
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
