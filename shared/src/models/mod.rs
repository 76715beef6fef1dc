//! Catalog and floor-plan models

pub mod dining_table;
pub mod dish;
pub mod zone;

pub use dining_table::{DiningTable, TableKind, TablePosition, TableStatus};
pub use dish::MenuItem;
pub use zone::Zone;
