//! Per-record unit of work

use super::types::{FailureCause, Outcome};
use crate::config::ProcessingConfig;
use crate::core::models::ItemId;
use crate::storage::ItemRepository;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, warn};

/// Loads one item, marks it processed and saves it back
#[derive(Debug, Clone)]
pub struct RecordProcessor {
    repository: Arc<dyn ItemRepository>,
    delay: Duration,
    processed_status: String,
}

impl RecordProcessor {
    /// Create a processor over the given repository
    pub fn new(repository: Arc<dyn ItemRepository>, config: &ProcessingConfig) -> Self {
        Self {
            repository,
            delay: config.delay(),
            processed_status: config.processed_status.clone(),
        }
    }

    /// Simulated work per record
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Status written to processed records
    pub fn processed_status(&self) -> &str {
        &self.processed_status
    }

    /// Process a single id
    ///
    /// `cancel` resolves once the owning batch has been abandoned. It is only
    /// observed during the delay; once the read starts the unit runs to the end.
    pub async fn process(&self, id: ItemId, cancel: &mut watch::Receiver<()>) -> Outcome {
        tokio::select! {
            _ = tokio::time::sleep(self.delay) => {}
            _ = cancel.changed() => {
                debug!("Item {} cancelled before processing", id);
                return Outcome::Failed(id, FailureCause::Cancelled);
            }
        }

        let item = match self.repository.find_by_id(id).await {
            Ok(Some(item)) => item,
            Ok(None) => {
                debug!("Item {} no longer exists, skipping", id);
                return Outcome::Skipped(id);
            }
            Err(e) => {
                warn!("Failed to load item {}: {}", id, e);
                return Outcome::Failed(id, FailureCause::LoadFailed(e.detail()));
            }
        };

        match self
            .repository
            .save(item.with_status(self.processed_status.clone()))
            .await
        {
            Ok(saved) => {
                debug!("Item {} processed", id);
                Outcome::Processed(saved)
            }
            Err(e) => {
                warn!("Failed to save item {}: {}", id, e);
                Outcome::Failed(id, FailureCause::SaveFailed(e.detail()))
            }
        }
    }
}
