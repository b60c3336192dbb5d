use clap::Subcommand;

#[derive(Subcommand)]
pub enum NotifyCommands {
    /// Email a low-stock alert for one SKU
    LowStock {
        #[arg(long)]
        sku_code: String,

        #[arg(long)]
        email: String,
    },

    /// Email an order confirmation
    Order {
        #[arg(long)]
        email: String,

        #[arg(long)]
        sku_code: String,

        #[arg(long)]
        quantity: i32,

        #[arg(long)]
        user_name: String,
    },
}
