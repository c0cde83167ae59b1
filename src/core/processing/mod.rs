//! Concurrent batch processing of stored items
//!
//! A [`TaskDispatcher`] fans one unit of work per item id out onto a shared,
//! fixed-capacity [`WorkerPool`], collects every [`Outcome`] in a per-batch
//! accumulator and only returns once all units have finished.

pub mod dispatcher;
pub mod pool;
pub mod processor;
pub mod types;


pub use dispatcher::TaskDispatcher;
pub use pool::WorkerPool;
pub use processor::RecordProcessor;
pub use types::*;
