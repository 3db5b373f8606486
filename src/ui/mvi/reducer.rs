//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Pure state transition function: `(State, Intent) -> State`.
///
/// Reducers never sleep, spawn or log. Timing and publication belong to
/// whoever owns the state cell.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the next state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
