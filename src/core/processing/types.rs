//! Outcome and result types for batch processing

use crate::core::models::{Item, ItemId};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;
use thiserror::Error;

/// Why a single unit of work failed
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum FailureCause {
    /// The repository could not be read for this id
    #[error("load failed: {0}")]
    LoadFailed(String),

    /// The item was read but writing it back failed
    #[error("save failed: {0}")]
    SaveFailed(String),

    /// The batch was abandoned before this unit touched storage
    #[error("cancelled before processing")]
    Cancelled,

    /// The worker task died without reporting
    #[error("worker panicked: {0}")]
    WorkerPanicked(String),
}

/// Result of processing one item id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The item was updated and persisted
    Processed(Item),
    /// The item no longer existed
    Skipped(ItemId),
    /// Processing failed; siblings are unaffected
    Failed(ItemId, FailureCause),
}

/// Failed id together with its cause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedItem {
    pub id: ItemId,
    pub cause: FailureCause,
}

/// Complete result of one batch run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Items updated by this run, ascending by id
    pub processed: Vec<Item>,
    /// Ids that were gone by the time their unit ran
    pub skipped: Vec<ItemId>,
    /// Ids whose unit failed
    pub failed: Vec<FailedItem>,
    /// Wall-clock duration of the run
    pub elapsed_ms: u64,
}

impl AggregateResult {
    /// Number of outcomes in the result
    pub fn total(&self) -> usize {
        self.processed.len() + self.skipped.len() + self.failed.len()
    }

    /// Whether the run had no work at all
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Ids of the processed items
    pub fn processed_ids(&self) -> Vec<ItemId> {
        self.processed.iter().filter_map(|item| item.id).collect()
    }

    /// Ids of the failed units
    pub fn failed_ids(&self) -> Vec<ItemId> {
        self.failed.iter().map(|f| f.id).collect()
    }

    /// Whether every unit failed before the repository returned its item
    ///
    /// A unit that got past the read saw a reachable repository, so save
    /// failures never count here.
    pub fn all_failed_on_load(&self) -> bool {
        self.processed.is_empty()
            && self.skipped.is_empty()
            && !self.failed.is_empty()
            && self
                .failed
                .iter()
                .all(|f| matches!(f.cause, FailureCause::LoadFailed(_)))
    }
}

/// Per-batch collector written to concurrently by workers
///
/// Drained exactly once by the dispatcher after the barrier.
#[derive(Debug, Default)]
pub struct BatchAccumulator {
    processed: Mutex<Vec<Item>>,
    skipped: Mutex<Vec<ItemId>>,
    failed: Mutex<Vec<FailedItem>>,
}

impl BatchAccumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one unit
    pub fn record(&self, outcome: Outcome) {
        match outcome {
            Outcome::Processed(item) => self.processed.lock().push(item),
            Outcome::Skipped(id) => self.skipped.lock().push(id),
            Outcome::Failed(id, cause) => self.failed.lock().push(FailedItem { id, cause }),
        }
    }

    /// Ids that already have an outcome
    pub fn recorded_ids(&self) -> HashSet<ItemId> {
        let mut ids: HashSet<ItemId> = self
            .processed
            .lock()
            .iter()
            .filter_map(|item| item.id)
            .collect();
        ids.extend(self.skipped.lock().iter().copied());
        ids.extend(self.failed.lock().iter().map(|f| f.id));
        ids
    }

    /// Number of recorded outcomes
    pub fn len(&self) -> usize {
        self.processed.lock().len() + self.skipped.lock().len() + self.failed.lock().len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Move everything recorded so far into an [`AggregateResult`]
    pub fn drain(&self, elapsed: Duration) -> AggregateResult {
        let mut processed = std::mem::take(&mut *self.processed.lock());
        let mut skipped = std::mem::take(&mut *self.skipped.lock());
        let mut failed = std::mem::take(&mut *self.failed.lock());

        processed.sort_by_key(|item| item.id);
        skipped.sort_unstable();
        failed.sort_by_key(|f| f.id);

        AggregateResult {
            processed,
            skipped,
            failed,
            elapsed_ms: elapsed.as_millis() as u64,
        }
    }
}
