//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Computes the next state from the current one and an intent.
///
/// Reducers hold no state and touch nothing outside their arguments;
/// publishing and persisting the result is the caller's job.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
