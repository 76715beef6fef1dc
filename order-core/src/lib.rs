//! Table ordering core
//!
//! Cart, table selection and order workflow for a restaurant's ordering
//! screens, persisted through a pluggable key-value store.
//!
//! # Module Structure
//!
//! ```text
//! order-core/src/
//! ├── common/    # config, logging
//! ├── catalog/   # dishes on the menu
//! ├── tables/    # zones and tables on the floor plan
//! └── orders/    # cart, orders, status workflow, storage
//! ```
//!
//! # Example
//!
//! ```
//! use order_core::{Catalog, MemoryStore, OrderStateManager};
//! use std::sync::Arc;
//!
//! let catalog = Catalog::house_menu();
//! let manager = OrderStateManager::open(Arc::new(MemoryStore::new()))?;
//!
//! manager.set_table("5")?;
//! manager.add_item(catalog.get("6").unwrap(), 2)?;
//! let order_id = manager.submit("Jane", "jane@x.com", None)?;
//!
//! assert_eq!(manager.order(&order_id).unwrap().total, 44.0);
//! # Ok::<(), order_core::ManagerError>(())
//! ```

pub mod catalog;
pub mod common;
pub mod orders;
pub mod tables;

// Re-export 公共类型
pub use catalog::Catalog;
pub use common::{Config, cleanup_old_logs, init_logger, init_logger_with_file};
pub use orders::{
    ManagerError, ManagerResult, MemoryStore, OrderStateManager, OrderStats, RedbStore,
    StateStore, StorageError,
};
pub use tables::TableDirectory;
