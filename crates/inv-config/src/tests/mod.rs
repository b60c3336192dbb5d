mod config;

use std::env;

use tempfile::TempDir;

/// Sets an env var for the duration of a test, restoring the prior value on
/// drop.
pub(crate) struct EnvGuard {
    key: &'static str,
    prior: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        let prior = env::var(key).ok();
        unsafe { env::set_var(key, value) };
        Self { key, prior }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.prior {
                Some(value) => env::set_var(self.key, value),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Point INV_CONFIG_DIR at a fresh temp directory.
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("INV_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}
