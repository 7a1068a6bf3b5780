//! Base trait for intents (user actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// An intent is a discrete user action (a control being pressed).
/// Reducers turn intents into new states.
pub trait Intent: Send + 'static {}
