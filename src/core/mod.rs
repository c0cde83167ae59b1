//! Core functionality for the item service
//!
//! This module contains the domain model and the batch processing engine.

pub mod models;
pub mod processing;

pub use models::{Item, ItemId, ItemPayload};
pub use processing::{AggregateResult, FailureCause, Outcome, TaskDispatcher, WorkerPool};
