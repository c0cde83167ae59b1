//! Item models
//!
//! An item is the single record type managed by the service.

use crate::utils::error::{Result, ServiceError};
use crate::utils::is_valid_email;
use serde::{Deserialize, Serialize};

/// Storage-assigned item identifier
pub type ItemId = i64;

/// Status given to freshly created items when the caller does not care
pub const STATUS_NEW: &str = "NEW";

/// Status written by the batch processor
pub const STATUS_PROCESSED: &str = "PROCESSED";

/// Stored item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Identifier, `None` until the item is first saved
    pub id: Option<ItemId>,
    /// Display name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Free-form status label (`NEW`, `PROCESSED`, ...)
    pub status: String,
    /// Contact address
    pub email: String,
}

impl Item {
    /// Create an unsaved item
    pub fn new(name: impl Into<String>, status: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            status: status.into(),
            email: email.into(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the identifier
    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = Some(id);
        self
    }

    /// Copy of this item carrying a new status
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }
}

/// Create/update request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemPayload {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: String,
    pub email: String,
}

impl ItemPayload {
    /// Check the payload against the item field rules
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();

        if self.name.trim().is_empty() {
            problems.push("Name is required");
        }
        if self.status.trim().is_empty() {
            problems.push("Status is required");
        }
        if self.email.trim().is_empty() {
            problems.push("Email is required");
        } else if !is_valid_email(self.email.trim()) {
            problems.push("Invalid email format");
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ServiceError::validation(problems.join(", ")))
        }
    }

    /// Turn a validated payload into an item with the given identifier
    pub fn into_item(self, id: Option<ItemId>) -> Item {
        Item {
            id,
            name: self.name.trim().to_string(),
            description: self.description,
            status: self.status.trim().to_string(),
            email: self.email.trim().to_string(),
        }
    }
}

impl From<Item> for ItemPayload {
    fn from(item: Item) -> Self {
        Self {
            name: item.name,
            description: item.description,
            status: item.status,
            email: item.email,
        }
    }
}
