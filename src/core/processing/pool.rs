//! Fixed-capacity worker pool

use crate::utils::error::{Result, ServiceError};
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tracing::info;

/// Bounded pool of worker slots
///
/// A slot is held for the whole lifetime of one unit of work. Capacity never
/// changes after construction.
#[derive(Debug, Clone)]
pub struct WorkerPool {
    semaphore: Arc<Semaphore>,
    capacity: usize,
}

impl WorkerPool {
    /// Create a pool with `capacity` slots (at least one)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            semaphore: Arc::new(Semaphore::new(capacity)),
            capacity,
        }
    }

    /// Wait for a free slot
    ///
    /// Fails only once the pool has been shut down.
    pub async fn acquire(&self) -> Result<OwnedSemaphorePermit> {
        self.semaphore
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| ServiceError::pool_unavailable("worker pool has been shut down"))
    }

    /// Total number of slots
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slots currently free
    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }

    /// Slots currently held by running units
    pub fn in_use(&self) -> usize {
        self.capacity.saturating_sub(self.available())
    }

    /// Stop handing out slots; units already running keep theirs
    pub fn shutdown(&self) {
        info!("Shutting down worker pool ({} slots)", self.capacity);
        self.semaphore.close();
    }

    /// Whether [`shutdown`](Self::shutdown) was called
    pub fn is_closed(&self) -> bool {
        self.semaphore.is_closed()
    }
}
