//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Orderable dish as published by the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub item_id: String,
    pub name: String,
    pub description: String,
    /// Price per unit in the venue currency
    pub unit_price: f64,
    /// Category slug (`"appetizers"`, `"mains"`, ...)
    pub category: String,
    /// Image reference for presentation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    /// Human readable preparation time (`"15 min"`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,
    #[serde(default)]
    pub is_vegetarian: bool,
    #[serde(default)]
    pub is_spicy: bool,
}
