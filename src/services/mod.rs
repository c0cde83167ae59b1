//! Services module
//!
//! This module contains business logic and service implementations

pub mod items;

pub use items::ItemService;
