use crate::core::models::item as domain;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};

/// Item database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    /// Item ID
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Display name
    pub name: String,

    /// Free-form description
    pub description: Option<String>,

    /// Status label
    pub status: String,

    /// Contact address
    pub email: String,
}

/// Item entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert to the domain item
    pub fn to_domain_item(self) -> domain::Item {
        domain::Item {
            id: Some(self.id),
            name: self.name,
            description: self.description,
            status: self.status,
            email: self.email,
        }
    }
}

impl From<&domain::Item> for ActiveModel {
    fn from(item: &domain::Item) -> Self {
        Self {
            id: item.id.map(Set).unwrap_or(NotSet),
            name: Set(item.name.clone()),
            description: Set(item.description.clone()),
            status: Set(item.status.clone()),
            email: Set(item.email.clone()),
        }
    }
}
