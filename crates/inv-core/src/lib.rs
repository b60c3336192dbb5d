pub mod error;
pub mod models;

pub use error::{CoreError, CoreResult};
pub use models::auth_response::AuthResponse;
pub use models::inventory_item::InventoryItem;
pub use models::low_stock_alert::LowStockAlert;
pub use models::order::Order;
pub use models::order_notification::OrderNotification;
pub use models::order_request::OrderRequest;
pub use models::order_status::OrderStatus;
pub use models::page::Page;
pub use models::signup_request::SignupRequest;
pub use models::user_account::UserAccount;

pub use models::role;

#[cfg(test)]
mod tests;
