use chrono::NaiveDate;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum InventoryCommands {
    /// List all inventory items
    List,

    /// Show one item by ID
    Get { id: i64 },

    /// Show one item by SKU code
    GetSku { sku_code: String },

    /// Create a new item
    Create {
        #[arg(long)]
        sku_code: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        quantity: i32,

        #[arg(long, default_value_t = 0)]
        reorder_level: i32,

        #[arg(long)]
        location: Option<String>,

        /// Expiry date (YYYY-MM-DD)
        #[arg(long)]
        expiry_date: Option<NaiveDate>,
    },

    /// Update an existing item
    Update {
        id: i64,

        #[arg(long)]
        sku_code: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        quantity: i32,

        #[arg(long, default_value_t = 0)]
        reorder_level: i32,

        #[arg(long)]
        location: Option<String>,

        /// Expiry date (YYYY-MM-DD)
        #[arg(long)]
        expiry_date: Option<NaiveDate>,
    },

    /// Delete an item
    Delete { id: i64 },

    /// Low-stock report computed from current stock levels
    Report {
        /// Also email a low-stock alert per item to this address
        #[arg(long)]
        notify: Option<String>,
    },
}
