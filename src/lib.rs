//! # item-service
//!
//! Record-management service: CRUD over a keyed item store plus a batch
//! processor that fans work out over a bounded worker pool and reports a
//! complete aggregate once every unit has finished.
//!
//! ## Features
//!
//! - **CRUD API**: `/api/items` endpoints backed by SeaORM or an in-memory map
//! - **Bounded Concurrency**: one shared worker pool with a fixed number of slots
//! - **Failure Isolation**: a failing record never aborts its siblings
//! - **Complete Results**: `processed + skipped + failed` always covers every id
//!
//! ## Library Use
//!
//! ```rust,no_run
//! use item_service::{Config, ItemService, storage::StorageLayer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let storage = StorageLayer::new(config.storage()).await?;
//!     let service = ItemService::new(storage.repository(), config.processing());
//!
//!     let result = service.process_all().await?;
//!     println!("processed {} items", result.processed.len());
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::models::{Item, ItemId, ItemPayload};
pub use core::processing::{AggregateResult, FailedItem, FailureCause, Outcome};
pub use services::ItemService;
pub use storage::{ItemRepository, StorageLayer};
pub use utils::error::{Result, ServiceError};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Service build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (seconds since the epoch)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
            rust_version: option_env!("RUST_VERSION").unwrap_or("unknown"),
        }
    }
}

/// Build information baked in by the build script
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
