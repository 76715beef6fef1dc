//! Table directory (zones and their tables)
//!
//! Advisory only: the order manager accepts any table identifier, so a
//! diner who types a table number by hand is never blocked by this data.

use shared::{DiningTable, TableKind, TablePosition, TableStatus, Zone};

/// (number, seats, status, x, y, kind)
type TableRow = (&'static str, u32, TableStatus, u8, u8, TableKind);

use TableKind::{Bar, Booth, Private, Regular};
use TableStatus::{Available, Occupied, Reserved};

const MAIN_TABLES: &[TableRow] = &[
    ("1", 2, Available, 20, 30, Regular),
    ("2", 4, Occupied, 60, 30, Regular),
    ("3", 2, Available, 20, 60, Regular),
    ("4", 6, Available, 60, 60, Regular),
    ("5", 4, Reserved, 40, 45, Regular),
    ("6", 2, Available, 80, 45, Regular),
    ("7", 8, Available, 40, 75, Regular),
    ("8", 4, Available, 15, 80, Regular),
];

const TERRACE_TABLES: &[TableRow] = &[
    ("T1", 2, Available, 25, 25, Regular),
    ("T2", 4, Available, 65, 25, Regular),
    ("T3", 2, Occupied, 25, 55, Regular),
    ("T4", 6, Available, 65, 55, Regular),
    ("T5", 4, Available, 45, 75, Regular),
    ("T6", 2, Available, 80, 40, Regular),
];

const BAR_TABLES: &[TableRow] = &[
    ("B1", 2, Available, 30, 40, Bar),
    ("B2", 2, Available, 50, 40, Bar),
    ("B3", 2, Occupied, 70, 40, Bar),
    ("B4", 4, Available, 40, 65, Booth),
    ("B5", 4, Available, 60, 65, Booth),
];

const PRIVATE_TABLES: &[TableRow] = &[
    ("P1", 8, Available, 30, 40, Private),
    ("P2", 12, Reserved, 70, 40, Private),
    ("P3", 6, Available, 50, 70, Private),
];

fn zone(
    id: &str,
    name: &str,
    description: &str,
    features: &[&str],
    rows: &[TableRow],
) -> Zone {
    Zone {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
        tables: rows
            .iter()
            .map(|&(number, seats, status, x, y, kind)| DiningTable {
                id: number.to_lowercase(),
                number: number.to_string(),
                seats,
                status,
                position: TablePosition { x, y },
                kind,
            })
            .collect(),
    }
}

/// Floor plan grouped by zone
#[derive(Debug, Clone, Default)]
pub struct TableDirectory {
    zones: Vec<Zone>,
}

impl TableDirectory {
    pub fn new(zones: Vec<Zone>) -> Self {
        Self { zones }
    }

    /// The restaurant's four dining areas
    pub fn house_floor_plan() -> Self {
        Self::new(vec![
            zone(
                "main",
                "Main Dining Room",
                "Our spacious main dining area with a warm, welcoming atmosphere",
                &["Open atmosphere", "Great for families", "View of kitchen"],
                MAIN_TABLES,
            ),
            zone(
                "terrace",
                "Garden Terrace",
                "Beautiful outdoor seating with garden views and fresh air",
                &["Outdoor seating", "Garden views", "Pet-friendly"],
                TERRACE_TABLES,
            ),
            zone(
                "bar",
                "Wine Bar",
                "Intimate bar area perfect for drinks and light bites",
                &["Full bar", "Wine selection", "Intimate setting"],
                BAR_TABLES,
            ),
            zone(
                "private",
                "Private Dining",
                "Exclusive private rooms for special occasions and business meetings",
                &["Private rooms", "Exclusive service", "Special occasions"],
                PRIVATE_TABLES,
            ),
        ])
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn zone(&self, zone_id: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == zone_id)
    }

    /// Look a table up by its printed number, ignoring case
    pub fn find_table(&self, number: &str) -> Option<(&Zone, &DiningTable)> {
        let number = number.trim();
        self.zones.iter().find_map(|zone| {
            zone.tables
                .iter()
                .find(|t| t.number.eq_ignore_ascii_case(number))
                .map(|t| (zone, t))
        })
    }

    /// Whether the floor plan would let a diner pick this table
    pub fn is_selectable(&self, number: &str) -> bool {
        self.find_table(number)
            .is_some_and(|(_, table)| table.is_available())
    }
}
