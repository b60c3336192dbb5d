use serde::{Deserialize, Serialize};

/// Order confirmation email request for the notification service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderNotification {
    pub email: String,
    pub sku_code: String,
    pub quantity: i32,
    pub user_name: String,
}
