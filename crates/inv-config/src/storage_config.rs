use crate::DEFAULT_SESSION_FILENAME;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Where the persisted session lives. Relative paths resolve against the
/// config directory.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub session_file: Option<PathBuf>,
}

impl StorageConfig {
    pub fn session_path(&self, config_dir: &Path) -> PathBuf {
        match &self.session_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => config_dir.join(path),
            None => config_dir.join(DEFAULT_SESSION_FILENAME),
        }
    }
}
