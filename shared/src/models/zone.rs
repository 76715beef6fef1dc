//! Zone Model

use super::DiningTable;
use serde::{Deserialize, Serialize};

/// Zone entity (区域：大厅、露台、酒吧、包厢)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub description: String,
    pub features: Vec<String>,
    pub tables: Vec<DiningTable>,
}

impl Zone {
    /// Number of tables a diner can currently pick
    pub fn available_count(&self) -> usize {
        self.tables.iter().filter(|t| t.is_available()).count()
    }
}
