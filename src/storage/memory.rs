use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use super::{KeyValueStore, StorageError};

/// In-process backend. Values live as long as the store does.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, u64>>,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the store, as if a previous session had written it.
    pub fn with_values(entries: &[(&str, u64)]) -> Self {
        let store = Self::new();
        {
            let mut values = store.values.lock();
            for (key, value) in entries {
                values.insert((*key).to_string(), *value);
            }
        }
        store
    }

    /// Number of batches written through [`KeyValueStore::put_all`].
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<u64> {
        self.values.lock().get(key).copied()
    }

    fn put_all(&self, entries: &[(&str, u64)]) -> Result<(), StorageError> {
        let mut values = self.values.lock();
        for (key, value) in entries {
            values.insert((*key).to_string(), *value);
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
