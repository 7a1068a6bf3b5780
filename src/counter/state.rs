use crate::ui::mvi::UiState;

/// Snapshot of both counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    /// People presently counted.
    pub current: u64,
    /// Cumulative count since the last reset.
    pub total: u64,
}

impl UiState for CounterState {}

impl CounterState {
    pub fn new(current: u64, total: u64) -> Self {
        Self { current, total }
    }
}
