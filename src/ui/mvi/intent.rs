//! Base trait for intents.

/// Marker trait for intent objects.
///
/// An intent is either something the user did (pressed login, pressed
/// clear) or something the system observed (the simulated check finished).
/// Intents may be produced on a spawned task, hence `Send`.
pub trait Intent: Send + 'static {}
