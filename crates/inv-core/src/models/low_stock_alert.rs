use crate::InventoryItem;

use serde::{Deserialize, Serialize};

/// Low-stock email request for the notification service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockAlert {
    pub sku_code: String,
    pub quantity_available: i32,
    pub reorder_level: i32,
    pub item_name: String,
    pub email: String,
}

impl LowStockAlert {
    /// Build an alert for an item that has hit its reorder level.
    pub fn for_item(item: &InventoryItem, email: String) -> Self {
        Self {
            sku_code: item.sku_code.clone(),
            quantity_available: item.quantity_available,
            reorder_level: item.reorder_level,
            item_name: item.name.clone(),
            email,
        }
    }
}
