//! Key-value persistence for counter values.
//!
//! A [`KeyValueStore`] is an opaque, namespaced map from string keys to
//! unsigned integers. Reads resolve missing or unusable entries to `None`;
//! writes upsert a batch of entries together.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize values: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Storage '{path}' is in use by another instance")]
    Locked { path: PathBuf },

    #[error("Storage '{path}' was opened read-only")]
    ReadOnly { path: PathBuf },

    #[error("Value {value} for '{key}' does not fit the storage format")]
    OutOfRange { key: String, value: u64 },
}

/// Namespaced key-value backend.
pub trait KeyValueStore: Send {
    /// Read the value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> Option<u64>;

    /// Upsert all `entries` as one write.
    fn put_all(&self, entries: &[(&str, u64)]) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + Sync> KeyValueStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Option<u64> {
        (**self).get(key)
    }

    fn put_all(&self, entries: &[(&str, u64)]) -> Result<(), StorageError> {
        (**self).put_all(entries)
    }
}
