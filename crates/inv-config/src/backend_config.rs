use crate::{
    BackendRoutes, ConfigError, ConfigErrorResult, DEFAULT_AUTH_URL, DEFAULT_INVENTORY_URL,
    DEFAULT_NOTIFICATIONS_URL, DEFAULT_ORDERS_URL,
};

use serde::Deserialize;

/// Base URLs of the four backend services plus the fallback target for
/// logical paths that match no known prefix.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub auth_url: String,
    pub inventory_url: String,
    pub orders_url: String,
    pub notifications_url: String,
    pub default_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            auth_url: DEFAULT_AUTH_URL.to_string(),
            inventory_url: DEFAULT_INVENTORY_URL.to_string(),
            orders_url: DEFAULT_ORDERS_URL.to_string(),
            notifications_url: DEFAULT_NOTIFICATIONS_URL.to_string(),
            // Unprefixed calls historically went to the user service.
            default_url: DEFAULT_AUTH_URL.to_string(),
        }
    }
}

impl BackendConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let urls = [
            ("auth_url", &self.auth_url),
            ("inventory_url", &self.inventory_url),
            ("orders_url", &self.orders_url),
            ("notifications_url", &self.notifications_url),
            ("default_url", &self.default_url),
        ];

        for (name, url) in urls {
            if url.is_empty() {
                return Err(ConfigError::backends(format!("{name} must not be empty")));
            }
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::backends(format!(
                    "{name} must start with http:// or https:// (got '{url}')"
                )));
            }
        }

        Ok(())
    }

    /// Build the ordered prefix table the dispatcher resolves against.
    pub fn route_table(&self) -> BackendRoutes {
        BackendRoutes::new(
            vec![
                ("/api/auth", self.auth_url.clone()),
                ("/api/inventory", self.inventory_url.clone()),
                ("/api/orders", self.orders_url.clone()),
                ("/api/notifications", self.notifications_url.clone()),
            ],
            self.default_url.clone(),
        )
    }
}
