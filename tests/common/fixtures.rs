//! Test fixtures and data factories

use item_service::core::models::{STATUS_NEW, STATUS_PROCESSED};
use item_service::{Item, ItemPayload};

/// Factory for creating test items
pub struct ItemFactory;

impl ItemFactory {
    /// Unsaved item with default fields
    pub fn create() -> Item {
        Item::new("Widget", STATUS_NEW, "owner@example.com").with_description("A test widget")
    }

    /// Unsaved item with a distinct name
    pub fn numbered(n: usize) -> Item {
        Item::new(
            format!("item-{}", n),
            STATUS_NEW,
            format!("owner{}@example.com", n),
        )
    }

    /// Item that has already been processed
    pub fn processed() -> Item {
        Self::create().with_status(STATUS_PROCESSED)
    }

    /// Valid request body
    pub fn payload() -> ItemPayload {
        ItemPayload::from(Self::create())
    }

    /// Request body with a malformed email
    pub fn invalid_payload() -> ItemPayload {
        ItemPayload {
            email: "not-an-email".to_string(),
            ..Self::payload()
        }
    }
}
