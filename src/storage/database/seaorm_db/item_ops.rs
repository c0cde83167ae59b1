use crate::core::models::{Item, ItemId};
use crate::storage::ItemRepository;
use crate::utils::error::{Result, ServiceError};
use async_trait::async_trait;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, item};
use super::types::SeaOrmDatabase;

#[async_trait]
impl ItemRepository for SeaOrmDatabase {
    async fn list_all_ids(&self) -> Result<Vec<ItemId>> {
        debug!("Listing item ids");

        let ids = entities::Item::find()
            .select_only()
            .column(item::Column::Id)
            .order_by_asc(item::Column::Id)
            .into_tuple::<i64>()
            .all(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(ids)
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>> {
        debug!("Finding item by id: {}", id);

        let model = entities::Item::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(model.map(|m| m.to_domain_item()))
    }

    async fn save(&self, item: Item) -> Result<Item> {
        let exists = match item.id {
            Some(id) => entities::Item::find_by_id(id)
                .one(&self.db)
                .await
                .map_err(ServiceError::Database)?
                .is_some(),
            None => false,
        };

        let active_model = item::ActiveModel::from(&item);

        let saved = if exists {
            debug!("Updating item: {:?}", item.id);
            active_model
                .update(&self.db)
                .await
                .map_err(ServiceError::Database)?
        } else {
            debug!("Inserting item: {}", item.name);
            active_model
                .insert(&self.db)
                .await
                .map_err(ServiceError::Database)?
        };

        Ok(saved.to_domain_item())
    }

    async fn delete_by_id(&self, id: ItemId) -> Result<bool> {
        debug!("Deleting item: {}", id);

        let result = entities::Item::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(result.rows_affected > 0)
    }

    async fn find_all(&self) -> Result<Vec<Item>> {
        debug!("Listing all items");

        let models = entities::Item::find()
            .order_by_asc(item::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(models.into_iter().map(|m| m.to_domain_item()).collect())
    }
}
