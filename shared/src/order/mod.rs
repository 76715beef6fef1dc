//! Order types
//!
//! - Line items: what sits in a diner's cart
//! - Orders: submitted, immutable snapshots of a cart with a status
//! - Command errors: codes handed back to presentation code

pub mod snapshot;
pub mod types;

// Re-exports
pub use snapshot::{Order, OrderStatus, UnknownStatus};
pub use types::*;
