//! Shared types for the table ordering core
//!
//! Data model consumed and produced by `order-core`: catalog dishes, dining
//! tables grouped into zones, cart line items, submitted orders and the
//! error codes handed back to presentation code.

pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{DiningTable, MenuItem, TableKind, TablePosition, TableStatus, Zone};
pub use order::{
    CommandError, CommandErrorCode, Order, OrderLineItem, OrderStatus, UnknownStatus,
};
