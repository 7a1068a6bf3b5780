//! Counter domain: state, intents, the pure reducer and the write-through
//! store that owns the authoritative values.

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::CounterState;
pub use store::{CounterStore, CURRENT_KEY, PREFS_NAMESPACE, TOTAL_KEY};
