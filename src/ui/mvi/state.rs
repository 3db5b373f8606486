//! Base trait for observable screen state.

/// Marker trait for state values published to subscribers.
///
/// `PartialEq` lets the publisher skip notifying when a transition leaves the
/// value unchanged. `Sync` is required because subscribers on other tasks
/// borrow the latest value in place.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
