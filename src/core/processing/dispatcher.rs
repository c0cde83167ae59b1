//! Batch dispatcher
//!
//! Fans work units out onto the worker pool and waits for all of them before
//! building the aggregate result.

use super::pool::WorkerPool;
use super::processor::RecordProcessor;
use super::types::{AggregateResult, BatchAccumulator, FailureCause, Outcome};
use crate::config::ProcessingConfig;
use crate::core::models::ItemId;
use crate::storage::ItemRepository;
use crate::utils::error::{Result, ServiceError};
use futures::future::join_all;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Runs batch passes over the repository
///
/// One dispatcher (and its pool) is shared by every caller; each call to
/// [`process_all`](Self::process_all) gets its own accumulator.
#[derive(Debug, Clone)]
pub struct TaskDispatcher {
    repository: Arc<dyn ItemRepository>,
    processor: Arc<RecordProcessor>,
    pool: WorkerPool,
}

impl TaskDispatcher {
    /// Create a dispatcher with its own pool sized from `config`
    pub fn new(repository: Arc<dyn ItemRepository>, config: &ProcessingConfig) -> Self {
        Self::with_pool(repository, WorkerPool::new(config.pool_size), config)
    }

    /// Create a dispatcher on an existing pool
    pub fn with_pool(
        repository: Arc<dyn ItemRepository>,
        pool: WorkerPool,
        config: &ProcessingConfig,
    ) -> Self {
        let processor = Arc::new(RecordProcessor::new(repository.clone(), config));
        Self {
            repository,
            processor,
            pool,
        }
    }

    /// Worker pool used by this dispatcher
    pub fn pool(&self) -> &WorkerPool {
        &self.pool
    }

    /// Process every item currently stored
    pub async fn process_all(&self) -> Result<AggregateResult> {
        let ids = self.repository.list_all_ids().await.map_err(|e| {
            error!("Unable to snapshot item ids: {}", e);
            e
        })?;
        self.process_ids(ids).await
    }

    /// Process the given ids
    ///
    /// Duplicate ids are collapsed, keeping the first occurrence.
    pub async fn process_ids(
        &self,
        ids: impl IntoIterator<Item = ItemId>,
    ) -> Result<AggregateResult> {
        let started = Instant::now();

        let requested: Vec<ItemId> = ids.into_iter().collect();
        let mut seen = HashSet::with_capacity(requested.len());
        let ids: Vec<ItemId> = requested.iter().copied().filter(|id| seen.insert(*id)).collect();
        if ids.len() != requested.len() {
            debug!("Collapsed {} duplicate ids", requested.len() - ids.len());
        }
        info!(
            "Starting batch of {} items on {} workers",
            ids.len(),
            self.pool.capacity()
        );

        let accumulator = Arc::new(BatchAccumulator::new());
        // Dropping the sender (with this future) cancels units still waiting.
        let (cancel_tx, cancel_rx) = watch::channel(());

        let mut handles: Vec<(ItemId, JoinHandle<()>)> = Vec::with_capacity(ids.len());
        let mut submit_error = None;

        for &id in &ids {
            let permit = match self.pool.acquire().await {
                Ok(permit) => permit,
                Err(e) => {
                    submit_error = Some(e);
                    break;
                }
            };

            let processor = self.processor.clone();
            let accumulator = accumulator.clone();
            let mut cancel = cancel_rx.clone();

            let handle = tokio::spawn(async move {
                let _permit = permit;
                let outcome = processor.process(id, &mut cancel).await;
                accumulator.record(outcome);
            });
            handles.push((id, handle));
        }

        // Barrier: every spawned unit is awaited, whatever the others did.
        let joined = join_all(
            handles
                .into_iter()
                .map(|(id, handle)| async move { (id, handle.await) }),
        )
        .await;

        for (id, joined) in joined {
            if let Err(e) = joined {
                warn!("Worker for item {} did not finish: {}", id, e);
                let detail = if e.is_panic() {
                    "task panicked".to_string()
                } else {
                    e.to_string()
                };
                accumulator.record(Outcome::Failed(id, FailureCause::WorkerPanicked(detail)));
            }
        }
        drop(cancel_tx);

        if let Some(e) = submit_error {
            error!(
                "Batch aborted after submitting {} of {} items: {}",
                accumulator.len(),
                ids.len(),
                e
            );
            return Err(e);
        }

        let recorded = accumulator.recorded_ids();
        for &id in &ids {
            if !recorded.contains(&id) {
                warn!("No outcome recorded for item {}", id);
                accumulator.record(Outcome::Failed(
                    id,
                    FailureCause::WorkerPanicked("no outcome reported".to_string()),
                ));
            }
        }

        let result = accumulator.drain(started.elapsed());
        debug_assert_eq!(result.total(), ids.len());

        if result.all_failed_on_load() {
            let first = result
                .failed
                .first()
                .map(|f| f.cause.to_string())
                .unwrap_or_default();
            error!("Repository unreachable for every item in the batch: {}", first);
            return Err(ServiceError::storage(format!(
                "repository unreachable for all {} items: {}",
                ids.len(),
                first
            )));
        }

        info!(
            "Batch finished in {}ms: {} processed, {} skipped, {} failed",
            result.elapsed_ms,
            result.processed.len(),
            result.skipped.len(),
            result.failed.len()
        );
        Ok(result)
    }
}
