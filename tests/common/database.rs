//! Test database utilities
//!
//! Provides in-memory SQLite databases for testing without external services.
//! Each test gets an isolated database instance.

use item_service::config::DatabaseConfig;
use item_service::storage::ItemRepository;
use item_service::storage::database::Database;
use item_service::{Item, ItemId};
use std::sync::Arc;

use super::fixtures::ItemFactory;

/// Test database wrapper providing isolated in-memory SQLite instances
#[derive(Debug, Clone)]
pub struct TestDatabase {
    inner: Arc<Database>,
}

impl TestDatabase {
    /// Create a new, migrated in-memory database
    pub async fn new() -> Self {
        let db = Database::new(&test_db_config())
            .await
            .expect("Failed to create in-memory test database");

        db.migrate()
            .await
            .expect("Failed to run database migrations");

        Self {
            inner: Arc::new(db),
        }
    }

    /// Create a database holding `count` fresh items
    pub async fn seeded(count: usize) -> Self {
        let db = Self::new().await;
        db.seed(count).await;
        db
    }

    /// Get reference to the underlying database
    pub fn db(&self) -> &Database {
        &self.inner
    }

    /// Get the database as a shared repository
    pub fn repository(&self) -> Arc<dyn ItemRepository> {
        self.inner.clone()
    }

    /// Insert `count` fresh items and return their ids
    pub async fn seed(&self, count: usize) -> Vec<ItemId> {
        let mut ids = Vec::with_capacity(count);
        for i in 0..count {
            let saved: Item = self
                .inner
                .save(ItemFactory::numbered(i))
                .await
                .expect("Failed to seed item");
            ids.extend(saved.id);
        }
        ids
    }
}

/// Config for a single-connection in-memory database
pub fn test_db_config() -> DatabaseConfig {
    DatabaseConfig::sqlite_in_memory()
}
