//! Integration tests for item-service
//!
//! These tests exercise real storage and the full HTTP stack.

pub mod api_tests;
pub mod config_tests;
pub mod processing_tests;
pub mod repository_tests;
