//! Inventory item - the stock record managed by the inventory service.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single SKU tracked by the inventory service.
///
/// `id` is assigned by the backend; create requests send `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub sku_code: String,
    pub name: String,
    pub quantity_available: i32,
    #[serde(default)]
    pub quantity_reserved: i32,
    #[serde(default)]
    pub reorder_level: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
}

impl InventoryItem {
    /// Create a new item with the fields the create form requires.
    pub fn new(sku_code: String, name: String, quantity_available: i32) -> Self {
        Self {
            id: None,
            sku_code,
            name,
            quantity_available,
            quantity_reserved: 0,
            reorder_level: 0,
            location: None,
            expiry_date: None,
        }
    }

    /// Whether the available quantity has fallen to the reorder level.
    pub fn is_low_stock(&self) -> bool {
        self.quantity_available <= self.reorder_level
    }
}
