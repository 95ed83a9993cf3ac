//! Reducer trait for MVI architecture.

use super::effect::Effect;
use super::intent::Intent;
use super::state::UiState;

/// New state plus at most one effect to run.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction<S> {
    pub state: S,
    pub effect: Option<Effect>,
}

impl<S> Reduction<S> {
    pub fn new(state: S) -> Self {
        Self {
            state,
            effect: None,
        }
    }

    pub fn with_effect(state: S, effect: Effect) -> Self {
        Self {
            state,
            effect: Some(effect),
        }
    }

    /// Wrap the state, keeping the effect.
    pub fn map<T>(self, f: impl FnOnce(S) -> T) -> Reduction<T> {
        Reduction {
            state: f(self.state),
            effect: self.effect,
        }
    }
}

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> (State, Effect?)
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state and an optional effect.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Reduction<Self::State>;
}
