//! Core data models for the item service

pub mod item;

// Re-export commonly used types
pub use item::*;
