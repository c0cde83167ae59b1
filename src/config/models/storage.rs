//! Storage configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Which repository implementation backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local map, lost on restart
    #[default]
    Memory,
    /// SQL database through SeaORM
    Database,
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "database" | "db" => Ok(StorageBackend::Database),
            other => Err(format!("Unknown storage backend: {}", other)),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Repository backend
    #[serde(default)]
    pub backend: StorageBackend,
    /// Database configuration (used by the database backend)
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl StorageConfig {
    /// Merge storage configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.backend != StorageBackend::default() {
            self.backend = other.backend;
        }
        self.database = self.database.merge(other.database);
        self
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.backend == StorageBackend::Database {
            if self.database.url.is_empty() {
                return Err("Database URL is required for the database backend".to_string());
            }
            if self.database.max_connections == 0 {
                return Err("Database max connections cannot be 0".to_string());
            }
        }
        Ok(())
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Maximum connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
    /// Run migrations on startup
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            connection_timeout: default_connection_timeout(),
            run_migrations: true,
        }
    }
}

impl DatabaseConfig {
    /// Merge database configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.url.is_empty() && other.url != default_database_url() {
            self.url = other.url;
        }
        if other.max_connections != default_max_connections() {
            self.max_connections = other.max_connections;
        }
        if other.connection_timeout != default_connection_timeout() {
            self.connection_timeout = other.connection_timeout;
        }
        if !other.run_migrations {
            self.run_migrations = other.run_migrations;
        }
        self
    }

    /// In-memory SQLite configuration, used by tests
    pub fn sqlite_in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1, // In-memory DB only supports 1 connection
            connection_timeout: 5,
            run_migrations: true,
        }
    }
}

fn default_database_url() -> String {
    "sqlite://data/items.db?mode=rwc".to_string()
}
