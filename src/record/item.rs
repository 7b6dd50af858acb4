//! Item record

use std::fmt;

/// An item owned (loosely) by a user
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i32,

    pub name: String,

    pub price: f32,

    pub quantity: i32,

    /// Id of the owning user; may not resolve
    pub owner_id: i32,
}

impl Item {
    /// Create a new item
    pub fn new(id: i32, name: impl Into<String>, price: f32, quantity: i32, owner_id: i32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity,
            owner_id,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Item {}: {} (price {:.2}, qty {}, owner {})",
            self.id, self.name, self.price, self.quantity, self.owner_id
        )
    }
}

/// Sent to an item's owner after `update_item_details` with `notify` set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub user_id: i32,
    pub user_name: String,
    pub item_id: i32,
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Notification sent to {} about item update", self.user_name)
    }
}
