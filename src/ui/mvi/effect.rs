//! Side effects requested by reducers.

use crate::rest::ApiRequest;

/// Work a reducer wants done outside the pure state transition.
///
/// The app executes effects after storing the new state, so a reducer never
/// touches the network or the router itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Send one request through the executor.
    Request(ApiRequest),
    /// Navigate to a client path, e.g. `/artikelU?id=301`.
    Navigate(String),
}
