use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};
use crate::storage::{FileStore, KeyValueStore, MemoryStore, StorageError};

/// Count people in and out from the terminal.
#[derive(Debug, Parser)]
#[command(name = "people-counter", version)]
pub struct Cli {
    /// Config file (default: ~/.config/people-counter/config.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the persisted counters.
    #[arg(long, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Keep counters in memory only; nothing is read or written on disk.
    #[arg(long, conflicts_with = "data_dir")]
    pub in_memory: bool,

    /// Print the stored counts and exit. Reads without taking the writer
    /// lock, so it works while the counter screen is open.
    #[arg(long)]
    pub print: bool,
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(dir) = &self.data_dir {
            config.storage.data_dir = Some(dir.clone());
        }
        Ok(config)
    }

    /// Open the backend selected by the flags and `config`.
    pub fn open_backend(&self, config: &Config) -> Result<Box<dyn KeyValueStore>, StorageError> {
        if self.in_memory {
            return Ok(Box::new(MemoryStore::new()));
        }
        let dir = config.storage.resolved_data_dir();
        let store = if self.print {
            FileStore::open_read_only(&dir, &config.storage.namespace)?
        } else {
            FileStore::open(&dir, &config.storage.namespace)?
        };
        tracing::info!(
            path = %store.path().display(),
            read_only = store.is_read_only(),
            "Using file store"
        );
        Ok(Box::new(store))
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use crate::counter::{CounterState, CounterStore};
    use crate::storage::{FileStore, KeyValueStore};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn parse_defaults() {
        let cli = Cli::try_parse_from(["people-counter"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.data_dir.is_none());
        assert!(!cli.in_memory);
        assert!(!cli.print);
    }

    #[test]
    fn parse_data_dir_and_print() {
        let cli =
            Cli::try_parse_from(["people-counter", "--data-dir", "/tmp/counts", "--print"])
                .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/counts")));
        assert!(cli.print);
    }

    #[test]
    fn in_memory_conflicts_with_data_dir() {
        let result =
            Cli::try_parse_from(["people-counter", "--in-memory", "--data-dir", "/tmp/x"]);
        assert!(result.is_err());
    }

    #[test]
    fn data_dir_overrides_config_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[storage]\ndata_dir = \"/from/config\"\n").unwrap();

        let cli = Cli::try_parse_from([
            "people-counter",
            "--config",
            config_path.to_str().unwrap(),
            "--data-dir",
            "/from/cli",
        ])
        .unwrap();
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.storage.data_dir, Some(PathBuf::from("/from/cli")));
    }

    #[test]
    fn print_reads_while_screen_holds_the_lock() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let data_dir = temp_dir.path().join("data");

        let writer = FileStore::open(&data_dir, "people_counter_prefs").unwrap();
        writer.put_all(&[("current", 2), ("total", 5)]).unwrap();

        let cli = Cli::try_parse_from([
            "people-counter",
            "--config",
            config_path.to_str().unwrap(),
            "--data-dir",
            data_dir.to_str().unwrap(),
            "--print",
        ])
        .unwrap();
        let config = cli.resolve_config().unwrap();
        let backend = cli.open_backend(&config).unwrap();
        let store = CounterStore::load(backend);
        assert_eq!(store.state(), CounterState::new(2, 5));
    }

    #[test]
    fn screen_still_takes_the_lock() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let data_dir = temp_dir.path().join("data");
        let _writer = FileStore::open(&data_dir, "people_counter_prefs").unwrap();

        let cli = Cli::try_parse_from([
            "people-counter",
            "--config",
            config_path.to_str().unwrap(),
            "--data-dir",
            data_dir.to_str().unwrap(),
        ])
        .unwrap();
        let config = cli.resolve_config().unwrap();
        assert!(cli.open_backend(&config).is_err());
    }
}
