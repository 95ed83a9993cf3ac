//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the UI layer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑          │
//!    │          └──→ Effect (request, navigation)
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of a view controller's state
//! - **Intent**: User actions or backend responses
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Effect**: Side effect requested by a reducer, executed by the app

mod effect;
mod intent;
mod reducer;
mod state;

pub use effect::Effect;
pub use intent::Intent;
pub use reducer::{Reducer, Reduction};
pub use state::UiState;
