//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use people_counter::counter::{CounterStore, CURRENT_KEY, TOTAL_KEY};
use people_counter::storage::{KeyValueStore, MemoryStore, StorageError};
use people_counter::ui::app::App;
use people_counter::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Store backed by a shared in-memory backend the test can inspect.
pub fn store_with(current: u64, total: u64) -> (CounterStore, Arc<MemoryStore>) {
    let backend = Arc::new(MemoryStore::with_values(&[
        (CURRENT_KEY, current),
        (TOTAL_KEY, total),
    ]));
    let store = CounterStore::load(Box::new(Arc::clone(&backend)));
    (store, backend)
}

pub fn empty_store() -> (CounterStore, Arc<MemoryStore>) {
    let backend = Arc::new(MemoryStore::new());
    let store = CounterStore::load(Box::new(Arc::clone(&backend)));
    (store, backend)
}

/// Persisted `(current, total)`; missing keys read as `None`.
pub fn persisted(backend: &MemoryStore) -> (Option<u64>, Option<u64>) {
    (backend.get(CURRENT_KEY), backend.get(TOTAL_KEY))
}

/// Backend whose writes always fail.
#[derive(Default)]
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Option<u64> {
        None
    }

    fn put_all(&self, _entries: &[(&str, u64)]) -> Result<(), StorageError> {
        Err(StorageError::Io {
            path: PathBuf::from("/counts/people_counter_prefs.toml"),
            source: io::Error::other("disk full"),
        })
    }
}

// -- Rendering ----------------------------------------------------------------

/// Draw `app` on a test backend and return the screen as text, one line
/// per row.
pub fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..height {
        for x in 0..width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
