pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod navigator;

pub use client::{Client, SharedSessionStore};
pub use error::{ClientError, Result as ClientResult};
pub use navigator::{Navigator, TerminalNavigator};
