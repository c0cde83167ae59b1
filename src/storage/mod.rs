//! Storage layer for the item service
//!
//! This module provides item persistence behind the [`ItemRepository`] trait,
//! backed either by a SeaORM database or by an in-process map.

/// Database storage module
pub mod database;
/// In-memory storage module
pub mod memory;

use crate::config::{StorageBackend, StorageConfig};
use crate::core::models::{Item, ItemId};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub use memory::InMemoryItemRepository;

/// Keyed item store
///
/// Implementations must be safe to call from many tasks at once; a single
/// `save` is atomic with respect to readers of the same id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Snapshot of every stored id, ascending
    async fn list_all_ids(&self) -> Result<Vec<ItemId>>;

    /// Look up one item
    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>>;

    /// Insert (no id, or unknown id) or replace (known id) an item
    async fn save(&self, item: Item) -> Result<Item>;

    /// Remove an item, returning whether it existed
    async fn delete_by_id(&self, id: ItemId) -> Result<bool>;

    /// Every stored item, ascending by id
    async fn find_all(&self) -> Result<Vec<Item>>;
}

impl std::fmt::Debug for dyn ItemRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ItemRepository")
    }
}

/// Main storage layer that owns the configured repository
#[derive(Clone)]
pub struct StorageLayer {
    /// Repository used by services
    repository: Arc<dyn ItemRepository>,
    /// Database handle when the SQL backend is active
    database: Option<Arc<database::Database>>,
}

impl std::fmt::Debug for StorageLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageLayer")
            .field("backend", &self.backend())
            .finish()
    }
}

impl StorageLayer {
    /// Create a new storage layer
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        info!("Initializing storage layer ({:?})", config.backend);

        let layer = match config.backend {
            StorageBackend::Memory => Self::in_memory(),
            StorageBackend::Database => {
                debug!("Connecting to database");
                let database = Arc::new(database::Database::new(&config.database).await?);
                if config.database.run_migrations {
                    database.migrate().await?;
                }
                Self {
                    repository: database.clone(),
                    database: Some(database),
                }
            }
        };

        info!("Storage layer initialized successfully");
        Ok(layer)
    }

    /// Storage layer backed by an empty in-memory repository
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryItemRepository::new()))
    }

    /// Storage layer backed by an arbitrary repository
    pub fn with_repository(repository: Arc<dyn ItemRepository>) -> Self {
        Self {
            repository,
            database: None,
        }
    }

    /// Active backend
    pub fn backend(&self) -> StorageBackend {
        if self.database.is_some() {
            StorageBackend::Database
        } else {
            StorageBackend::Memory
        }
    }

    /// Shared handle to the repository
    pub fn repository(&self) -> Arc<dyn ItemRepository> {
        self.repository.clone()
    }

    /// Database handle (if the SQL backend is active)
    pub fn database(&self) -> Option<&database::Database> {
        self.database.as_deref()
    }

    /// Health check for the active backend
    pub async fn health_check(&self) -> StorageHealthStatus {
        let healthy = match &self.database {
            Some(db) => match db.health_check().await {
                Ok(()) => true,
                Err(e) => {
                    warn!("Database health check failed: {}", e);
                    false
                }
            },
            None => match self.repository.list_all_ids().await {
                Ok(_) => true,
                Err(e) => {
                    warn!("Repository health check failed: {}", e);
                    false
                }
            },
        };

        StorageHealthStatus {
            backend: self.backend(),
            healthy,
        }
    }
}

/// Storage health status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageHealthStatus {
    /// Active backend
    pub backend: StorageBackend,
    /// Whether the backend answered
    pub healthy: bool,
}
