//! inv-cli library
//!
//! Exports the HTTP client and the screen table for use in tests and other
//! crates.

pub(crate) mod auth_commands;
pub(crate) mod cli;
pub(crate) mod client;
pub(crate) mod commands;
pub(crate) mod inventory_commands;
pub(crate) mod notify_commands;
pub(crate) mod order_commands;
pub(crate) mod user_commands;

pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use auth_commands::AuthCommands;
pub use cli::Cli;
pub use client::{
    Client, ClientError, ClientResult, Navigator, SharedSessionStore, TerminalNavigator,
};
pub use commands::Commands;
pub use inventory_commands::InventoryCommands;
pub use notify_commands::NotifyCommands;
pub use order_commands::OrderCommands;
pub use user_commands::UserCommands;
