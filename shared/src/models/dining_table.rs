//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Occupancy shown on the floor plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
    Reserved,
}

/// Furniture type (吧台、卡座、包厢)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    #[default]
    Regular,
    Booth,
    Bar,
    Private,
}

/// Position on the zone map, in percent of width/height
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TablePosition {
    pub x: u8,
    pub y: u8,
}

/// Dining table entity (桌台)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiningTable {
    pub id: String,
    /// Number printed on the table, used as the table selection value
    pub number: String,
    pub seats: u32,
    pub status: TableStatus,
    pub position: TablePosition,
    pub kind: TableKind,
}

impl DiningTable {
    /// Whether a diner may pick this table from the floor plan
    pub fn is_available(&self) -> bool {
        self.status == TableStatus::Available
    }
}
