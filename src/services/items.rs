//! Item service
//!
//! CRUD operations over the item repository plus the batch processing entry point.

use crate::config::ProcessingConfig;
use crate::core::models::{Item, ItemId, ItemPayload};
use crate::core::processing::{AggregateResult, TaskDispatcher, WorkerPool};
use crate::storage::ItemRepository;
use crate::utils::error::{Result, ServiceError};
use crate::utils::format_duration;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Item service
#[derive(Debug, Clone)]
pub struct ItemService {
    repository: Arc<dyn ItemRepository>,
    dispatcher: TaskDispatcher,
    batch_timeout: Option<Duration>,
}

impl ItemService {
    /// Create a new item service
    pub fn new(repository: Arc<dyn ItemRepository>, config: &ProcessingConfig) -> Self {
        let dispatcher = TaskDispatcher::new(repository.clone(), config);
        info!(
            "Item service initialized ({} workers, {}ms per item)",
            config.pool_size, config.delay_ms
        );
        Self {
            repository,
            dispatcher,
            batch_timeout: config.batch_timeout(),
        }
    }

    /// Worker pool shared by all batch runs
    pub fn pool(&self) -> &WorkerPool {
        self.dispatcher.pool()
    }

    /// List every item
    pub async fn find_all(&self) -> Result<Vec<Item>> {
        self.repository.find_all().await
    }

    /// Get one item
    pub async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>> {
        self.repository.find_by_id(id).await
    }

    /// Get one item, failing with `NotFound` when absent
    pub async fn get(&self, id: ItemId) -> Result<Item> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("Item {} not found", id)))
    }

    /// Validate and store a new item
    pub async fn create(&self, payload: ItemPayload) -> Result<Item> {
        payload.validate()?;
        let item = self.repository.save(payload.into_item(None)).await?;
        debug!("Created item {:?}", item.id);
        Ok(item)
    }

    /// Replace an existing item
    pub async fn update(&self, id: ItemId, payload: ItemPayload) -> Result<Item> {
        payload.validate()?;
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found(format!("Item {} not found", id)));
        }

        let item = self.repository.save(payload.into_item(Some(id))).await?;
        debug!("Updated item {}", id);
        Ok(item)
    }

    /// Delete an item
    pub async fn delete(&self, id: ItemId) -> Result<()> {
        if !self.repository.delete_by_id(id).await? {
            return Err(ServiceError::not_found(format!("Item {} not found", id)));
        }
        debug!("Deleted item {}", id);
        Ok(())
    }

    /// Process every stored item
    ///
    /// When a batch timeout is configured and expires, the run is abandoned and
    /// `Timeout` is returned; units already writing still complete.
    pub async fn process_all(&self) -> Result<AggregateResult> {
        match self.batch_timeout {
            Some(limit) => tokio::time::timeout(limit, self.dispatcher.process_all())
                .await
                .map_err(|_| {
                    let limit = format_duration(limit.as_millis() as u64);
                    warn!("Batch processing exceeded {}", limit);
                    ServiceError::timeout(format!("Batch processing exceeded {}", limit))
                })?,
            None => self.dispatcher.process_all().await,
        }
    }

    /// Process a chosen set of ids
    pub async fn process_ids(&self, ids: Vec<ItemId>) -> Result<AggregateResult> {
        self.dispatcher.process_ids(ids).await
    }
}
