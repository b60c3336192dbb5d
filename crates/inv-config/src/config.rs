use crate::{BackendConfig, ConfigError, ConfigErrorResult, LoggingConfig, StorageConfig};

use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub backends: BackendConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for INV_CONFIG_DIR env var, else use ./.inv/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply INV_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: INV_CONFIG_DIR env var > ./.inv/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("INV_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".inv"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.backends.validate()?;
        Ok(())
    }

    /// Absolute path of the session file for this process.
    pub fn session_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(self.storage.session_path(&Self::config_dir()?))
    }

    fn apply_env_overrides(&mut self) {
        let overrides = [
            ("INV_BACKEND_AUTH_URL", &mut self.backends.auth_url),
            ("INV_BACKEND_INVENTORY_URL", &mut self.backends.inventory_url),
            ("INV_BACKEND_ORDERS_URL", &mut self.backends.orders_url),
            (
                "INV_BACKEND_NOTIFICATIONS_URL",
                &mut self.backends.notifications_url,
            ),
            ("INV_BACKEND_DEFAULT_URL", &mut self.backends.default_url),
        ];

        for (key, target) in overrides {
            if let Ok(value) = std::env::var(key) {
                *target = value;
            }
        }

        if let Ok(value) = std::env::var("INV_LOG_LEVEL") {
            if let Ok(level) = crate::LogLevel::from_str(&value) {
                self.logging.level = level;
            }
        }

        if let Ok(value) = std::env::var("INV_SESSION_FILE") {
            self.storage.session_file = Some(PathBuf::from(value));
        }
    }
}
