mod backend_config;
mod backend_routes;
mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

pub use backend_config::BackendConfig;
pub use backend_routes::BackendRoutes;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

const DEFAULT_AUTH_URL: &str = "http://localhost:8081";
const DEFAULT_INVENTORY_URL: &str = "http://localhost:8082";
const DEFAULT_ORDERS_URL: &str = "http://localhost:8083";
const DEFAULT_NOTIFICATIONS_URL: &str = "http://localhost:8084";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_SESSION_FILENAME: &str = "session.json";

#[cfg(test)]
mod tests;
