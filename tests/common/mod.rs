//! Common test utilities for item-service
//!
//! - In-memory SQLite database support
//! - Item fixtures
//! - Fault injection around any repository

pub mod database;
pub mod fixtures;
pub mod repository;

// Re-export commonly used items
pub use database::TestDatabase;
pub use fixtures::ItemFactory;
pub use repository::FlakyRepository;
