//! Marker trait for view controller state.

/// State bound to one view.
///
/// `Default` is the state a view starts in on activation; the app swaps it
/// out with `std::mem::take` while a reducer runs. `PartialEq` lets tests and
/// the stale-response guard compare whole states.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
