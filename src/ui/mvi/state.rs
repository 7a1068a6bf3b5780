//! Base trait for UI state in MVI architecture.

/// Marker trait for state objects.
///
/// States are plain values: cloned to produce the next state, compared to
/// detect changes, and defaulted for a fresh session.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
