//! Fault-injecting repository wrapper

use async_trait::async_trait;
use item_service::storage::ItemRepository;
use item_service::{Item, ItemId, Result, ServiceError};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Delegates to an inner repository, failing on request
pub struct FlakyRepository {
    inner: Arc<dyn ItemRepository>,
    fail_saves: Mutex<HashSet<ItemId>>,
    offline: AtomicBool,
}

impl FlakyRepository {
    /// Wrap a repository with no faults armed
    pub fn new(inner: Arc<dyn ItemRepository>) -> Self {
        Self {
            inner,
            fail_saves: Mutex::new(HashSet::new()),
            offline: AtomicBool::new(false),
        }
    }

    /// Make the next save of `id` fail once
    pub fn fail_next_save(&self, id: ItemId) {
        self.fail_saves.lock().insert(id);
    }

    /// Make every read and write fail (except the id snapshot)
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            Err(ServiceError::storage("connection refused"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ItemRepository for FlakyRepository {
    async fn list_all_ids(&self) -> Result<Vec<ItemId>> {
        self.inner.list_all_ids().await
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>> {
        self.check_online()?;
        self.inner.find_by_id(id).await
    }

    async fn save(&self, item: Item) -> Result<Item> {
        self.check_online()?;
        if let Some(id) = item.id {
            if self.fail_saves.lock().remove(&id) {
                return Err(ServiceError::storage(format!("transient failure saving {}", id)));
            }
        }
        self.inner.save(item).await
    }

    async fn delete_by_id(&self, id: ItemId) -> Result<bool> {
        self.check_online()?;
        self.inner.delete_by_id(id).await
    }

    async fn find_all(&self) -> Result<Vec<Item>> {
        self.check_online()?;
        self.inner.find_all().await
    }
}
