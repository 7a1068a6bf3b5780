use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use parking_lot::Mutex;
use toml::{Table, Value};

use super::{KeyValueStore, StorageError};

/// TOML-file backend: one `<namespace>.toml` file per namespace.
///
/// The file is read once on open. Writes go to a temp file that is then
/// renamed over the original. A writable store holds an exclusive lock on
/// `<namespace>.lock` for its lifetime so only one process writes a
/// namespace at a time. Read-only stores take no lock.
pub struct FileStore {
    path: PathBuf,
    values: Mutex<Table>,
    lock: Option<File>,
}

impl FileStore {
    /// Open `namespace` under `dir` for reading and writing.
    pub fn open(dir: &Path, namespace: &str) -> Result<Self, StorageError> {
        fs::create_dir_all(dir).map_err(|source| StorageError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let lock_path = dir.join(format!("{namespace}.lock"));
        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|source| StorageError::Io {
                path: lock_path.clone(),
                source,
            })?;
        if lock.try_lock_exclusive().is_err() {
            return Err(StorageError::Locked { path: lock_path });
        }

        Self::load(dir, namespace, Some(lock))
    }

    /// Open `namespace` under `dir` without taking the writer lock.
    ///
    /// Sees whatever the writer last renamed into place. Creates nothing
    /// on disk; writes fail with [`StorageError::ReadOnly`].
    pub fn open_read_only(dir: &Path, namespace: &str) -> Result<Self, StorageError> {
        Self::load(dir, namespace, None)
    }

    fn load(dir: &Path, namespace: &str, lock: Option<File>) -> Result<Self, StorageError> {
        let path = dir.join(format!("{namespace}.toml"));
        let values = read_table(&path)?;
        tracing::debug!(
            path = %path.display(),
            keys = values.len(),
            writable = lock.is_some(),
            "Opened file store"
        );

        Ok(Self {
            path,
            values: Mutex::new(values),
            lock,
        })
    }

    /// Path of the backing TOML file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_read_only(&self) -> bool {
        self.lock.is_none()
    }

    fn write_atomic(&self, content: &str) -> Result<(), StorageError> {
        let tmp_path = self.path.with_extension("toml.tmp");
        let io_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source: io::Error| StorageError::Io { path, source }
        };

        let mut tmp = File::create(&tmp_path).map_err(io_err(&tmp_path))?;
        tmp.write_all(content.as_bytes())
            .and_then(|_| tmp.sync_all())
            .map_err(io_err(&tmp_path))?;
        drop(tmp);

        fs::rename(&tmp_path, &self.path).map_err(io_err(&self.path))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<u64> {
        self.values
            .lock()
            .get(key)
            .and_then(Value::as_integer)
            .and_then(|value| u64::try_from(value).ok())
    }

    fn put_all(&self, entries: &[(&str, u64)]) -> Result<(), StorageError> {
        if self.is_read_only() {
            return Err(StorageError::ReadOnly {
                path: self.path.clone(),
            });
        }

        // TOML integers are i64; validate the whole batch before touching
        // the cached table.
        let mut encoded = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            let integer = i64::try_from(*value).map_err(|_| StorageError::OutOfRange {
                key: (*key).to_string(),
                value: *value,
            })?;
            encoded.push(((*key).to_string(), Value::Integer(integer)));
        }

        let mut values = self.values.lock();
        for (key, value) in encoded {
            values.insert(key, value);
        }
        let content = toml::to_string(&*values)?;
        self.write_atomic(&content)
    }
}

/// Missing file reads as empty. A file that exists but does not parse is
/// also treated as empty; the next write replaces it.
fn read_table(path: &Path) -> Result<Table, StorageError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Table::new()),
        Err(source) => {
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    match toml::from_str::<Table>(&content) {
        Ok(table) => Ok(table),
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "Ignoring unreadable counter file"
            );
            Ok(Table::new())
        }
    }
}
