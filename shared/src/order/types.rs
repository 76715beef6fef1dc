//! Shared types for the cart and command results

use crate::models::MenuItem;
use serde::{Deserialize, Serialize};

// ============================================================================
// Cart Item Types
// ============================================================================

/// One catalog dish plus the quantity ordered
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    /// Catalog item ID (unique within a cart)
    pub item_id: String,
    /// Dish name snapshot
    pub name: String,
    /// Price per unit at the time the item was added
    pub unit_price: f64,
    /// Quantity, always >= 1 while stored
    pub quantity: i32,
    /// Category slug snapshot (for statistics)
    pub category: String,
    /// Image reference snapshot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_ref: Option<String>,
}

impl OrderLineItem {
    /// Build a line item from a catalog entry
    pub fn from_menu_item(item: &MenuItem, quantity: i32) -> Self {
        Self {
            item_id: item.item_id.clone(),
            name: item.name.clone(),
            unit_price: item.unit_price,
            quantity,
            category: item.category.clone(),
            media_ref: item.media_ref.clone(),
        }
    }
}

// ============================================================================
// Command Errors
// ============================================================================

/// Command error
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommandError {
    pub code: CommandErrorCode,
    pub message: String,
}

impl CommandError {
    pub fn new(code: CommandErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Command error codes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandErrorCode {
    InvalidQuantity,
    InvalidPrice,
    ItemNotFound,
    EmptyCart,
    NoTableSelected,
    OrderNotFound,
    TerminalState,
    InvalidStatus,
    // Storage errors
    StorageFull,
    OutOfMemory,
    StorageCorrupted,
    SystemBusy,
}

impl CommandErrorCode {
    /// True when the failure came from persistence rather than caller input
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            Self::StorageFull
                | Self::OutOfMemory
                | Self::StorageCorrupted
                | Self::SystemBusy
        )
    }
}
