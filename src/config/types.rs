use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::counter::PREFS_NAMESPACE;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
}

/// Where the counters are persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the counter file (default: platform data dir).
    pub data_dir: Option<PathBuf>,
    /// File stem of the counter file and its lock.
    pub namespace: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            namespace: PREFS_NAMESPACE.to_string(),
        }
    }
}

impl StorageConfig {
    /// Configured data dir, or `~/.local/share/people-counter` (platform
    /// equivalent via `dirs::data_dir()`), or the current directory.
    pub fn resolved_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        dirs::data_dir()
            .map(|dir| dir.join("people-counter"))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
