//! In-memory item repository
//!
//! Keeps items in an ordered map guarded by a `parking_lot` lock. Identifiers
//! are handed out from a monotonically increasing sequence and never reused.

use super::ItemRepository;
use crate::core::models::{Item, ItemId};
use crate::utils::error::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::debug;

/// Process-local item store
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    items: RwLock<BTreeMap<ItemId, Item>>,
    next_id: AtomicI64,
}

impl InMemoryItemRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with items
    ///
    /// Items without an id get one assigned in iteration order.
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let repo = Self::new();
        {
            let mut map = repo.items.write();
            for item in items {
                let stored = repo.assign_id(item);
                if let Some(id) = stored.id {
                    map.insert(id, stored);
                }
            }
        }
        repo
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    fn assign_id(&self, mut item: Item) -> Item {
        match item.id {
            Some(id) => {
                // keep the sequence ahead of explicitly chosen ids
                self.next_id.fetch_max(id, Ordering::SeqCst);
            }
            None => {
                item.id = Some(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
            }
        }
        item
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn list_all_ids(&self) -> Result<Vec<ItemId>> {
        Ok(self.items.read().keys().copied().collect())
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>> {
        Ok(self.items.read().get(&id).cloned())
    }

    async fn save(&self, item: Item) -> Result<Item> {
        let stored = self.assign_id(item);
        if let Some(id) = stored.id {
            debug!("Saving item {} in memory", id);
            self.items.write().insert(id, stored.clone());
        }
        Ok(stored)
    }

    async fn delete_by_id(&self, id: ItemId) -> Result<bool> {
        Ok(self.items.write().remove(&id).is_some())
    }

    async fn find_all(&self) -> Result<Vec<Item>> {
        Ok(self.items.read().values().cloned().collect())
    }
}
