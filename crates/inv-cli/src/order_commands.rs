use clap::Subcommand;

#[derive(Subcommand)]
pub enum OrderCommands {
    /// Paged order listing
    List {
        #[arg(long, default_value_t = 0)]
        page: i64,

        #[arg(long, default_value_t = 5)]
        size: i64,
    },

    /// Show one order by ID
    Get { id: i64 },

    /// Place a new order
    Place {
        #[arg(long)]
        sku_code: String,

        #[arg(long)]
        quantity: i32,
    },

    /// Update an existing order
    Update {
        id: i64,

        #[arg(long)]
        sku_code: String,

        #[arg(long)]
        quantity: i32,
    },

    /// Delete an order
    Delete { id: i64 },
}
