use crate::counter::intent::CounterIntent;
use crate::counter::reducer::CounterReducer;
use crate::counter::state::CounterState;
use crate::observable::{Observable, Subject};
use crate::storage::KeyValueStore;
use crate::ui::mvi::Reducer;

/// Namespace the counters are persisted under.
pub const PREFS_NAMESPACE: &str = "people_counter_prefs";
/// Key for the current count.
pub const CURRENT_KEY: &str = "current";
/// Key for the total count.
pub const TOTAL_KEY: &str = "total";

/// Owns the authoritative counter values.
///
/// Values are loaded from the injected backend once, on construction.
/// Every mutation updates the observables first and then writes both
/// values through to the backend. The backend is never read again.
pub struct CounterStore {
    current: Subject<u64>,
    total: Subject<u64>,
    backend: Box<dyn KeyValueStore>,
}

impl CounterStore {
    /// Load both counters from `backend`, defaulting each to zero.
    pub fn load(backend: Box<dyn KeyValueStore>) -> Self {
        let current = backend.get(CURRENT_KEY).unwrap_or(0);
        let total = backend.get(TOTAL_KEY).unwrap_or(0);
        tracing::info!(current, total, "Loaded counters");

        Self {
            current: Subject::new(current),
            total: Subject::new(total),
            backend,
        }
    }

    /// Read-only view of the current count.
    pub fn current(&self) -> Observable<u64> {
        self.current.observable()
    }

    /// Read-only view of the total count.
    pub fn total(&self) -> Observable<u64> {
        self.total.observable()
    }

    pub fn state(&self) -> CounterState {
        CounterState::new(self.current.get(), self.total.get())
    }

    pub fn increment(&self) {
        self.dispatch(CounterIntent::Increment);
    }

    pub fn decrement(&self) {
        self.dispatch(CounterIntent::Decrement);
    }

    pub fn reset(&self) {
        self.dispatch(CounterIntent::Reset);
    }

    /// Apply `intent`, publish the new values, then persist them.
    pub fn dispatch(&self, intent: CounterIntent) {
        let next = CounterReducer::reduce(self.state(), intent);
        tracing::debug!(?intent, current = next.current, total = next.total, "Dispatch");

        self.current.set(next.current);
        self.total.set(next.total);
        self.persist(next);
    }

    fn persist(&self, state: CounterState) {
        let entries = [(CURRENT_KEY, state.current), (TOTAL_KEY, state.total)];
        if let Err(err) = self.backend.put_all(&entries) {
            // In-memory state stays authoritative; the next write retries.
            tracing::warn!(error = %err, "Failed to persist counters");
        }
    }
}
