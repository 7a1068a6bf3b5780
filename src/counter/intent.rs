use crate::ui::mvi::Intent;

/// The three user actions a counter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    /// One more person: bumps both counts.
    Increment,
    /// One person left. Clamped at zero; total untouched.
    Decrement,
    /// Start over from zero.
    Reset,
}

impl Intent for CounterIntent {}
