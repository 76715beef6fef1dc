//! Order lifecycle for a diner session
//!
//! - **manager**: `OrderStateManager`, owner of cart, table and orders
//! - **workflow**: status transitions and per-status counts
//! - **storage**: key-value port the manager persists through (redb / memory)
//! - **money**: decimal totals and price/quantity validation
//! - **stats**: dashboard figures
//!
//! # Data Flow
//!
//! ```text
//! Catalog ──add_item──▶ OrderStateManager ──commit──▶ StateStore
//!                          │      ▲
//!                  submit  │      │ advance / set_status
//!                          ▼      │
//!                        Order (pending → … → completed)
//! ```

pub mod manager;
pub mod money;
pub mod stats;
pub mod storage;
pub mod workflow;

// Re-exports
pub use manager::{ManagerError, ManagerResult, OrderStateManager};
pub use stats::OrderStats;
pub use storage::{MemoryStore, RedbStore, StateStore, StorageError, StorageResult, WriteBatch};

// Re-export shared types for convenience
pub use shared::order::{CommandError, CommandErrorCode, Order, OrderLineItem, OrderStatus};
