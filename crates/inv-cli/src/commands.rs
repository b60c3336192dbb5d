use crate::auth_commands::AuthCommands;
use crate::inventory_commands::InventoryCommands;
use crate::notify_commands::NotifyCommands;
use crate::order_commands::OrderCommands;
use crate::user_commands::UserCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in, sign up, and session management
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },

    /// Stock levels, orders placed, and low-stock summary
    Dashboard,

    /// Inventory screens
    Inventory {
        #[command(subcommand)]
        action: InventoryCommands,
    },

    /// Order screens
    Order {
        #[command(subcommand)]
        action: OrderCommands,
    },

    /// User administration
    Users {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Notification triggers
    Notify {
        #[command(subcommand)]
        action: NotifyCommands,
    },
}
