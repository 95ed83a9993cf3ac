//! Navigation between views.
//!
//! The [`RouteTable`] is built once at startup and never changes. The
//! [`Router`] owns the current [`Location`] and a generation counter that
//! increments on every transition; requests issued by a controller carry the
//! generation they were issued in so late answers can be recognized.
//!
//! Unmatched or malformed targets redirect to the table's default route.

mod location;
mod route;

pub use location::{with_id, Location, LocationError};
pub use route::{
    Route, RouteTable, ViewKind, ARTIKEL_CREATE, ARTIKEL_EDIT, ARTIKEL_SEARCH, BEZEICHNUNG_PARAM,
    HOME, ID_PARAM, KUNDE_SEARCH, NACHNAME_PARAM, ROOT,
};

/// Number of locations kept for [`Router::back`].
const HISTORY_LIMIT: usize = 32;

/// Result of a transition: which view to activate and with what location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    pub view: ViewKind,
    pub location: Location,
    pub generation: u64,
    /// True when the requested target did not match and the default was used.
    pub redirected: bool,
}

pub struct Router {
    table: RouteTable,
    current: Activation,
    history: Vec<Location>,
}

impl Router {
    /// Create a router positioned at `start` (or the default route if
    /// `start` does not match).
    pub fn new(table: RouteTable, start: &str) -> Self {
        let current = Self::resolve_in(&table, start, 0);
        Self {
            table,
            current,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &Activation {
        &self.current
    }

    pub fn location(&self) -> &Location {
        &self.current.location
    }

    pub fn view(&self) -> ViewKind {
        self.current.view
    }

    pub fn generation(&self) -> u64 {
        self.current.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.current.generation == generation
    }

    /// Transition to `target`. The previous location goes onto the history.
    pub fn navigate(&mut self, target: &str) -> Activation {
        let previous = self.current.location.clone();
        self.history.push(previous);
        if self.history.len() > HISTORY_LIMIT {
            self.history.remove(0);
        }
        self.transition(target)
    }

    /// Return to the previous location, if any.
    pub fn back(&mut self) -> Option<Activation> {
        let previous = self.history.pop()?;
        Some(self.transition(&previous.to_string()))
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Record what the active view currently shows, e.g. the query of the
    /// last search, so that returning here later restores it.
    ///
    /// No transition: view, generation and history stay as they are. A
    /// location that belongs to another view is ignored.
    pub fn rebind(&mut self, location: Location) {
        let same_view = self
            .table
            .resolve(location.path())
            .is_some_and(|route| route.view == self.current.view);
        if !same_view {
            tracing::warn!(location = %location, "Ignoring rebind to a different view");
            return;
        }
        tracing::debug!(location = %location, generation = self.current.generation, "Rebound");
        self.current.location = location;
    }

    fn transition(&mut self, target: &str) -> Activation {
        let generation = self.current.generation.wrapping_add(1);
        self.current = Self::resolve_in(&self.table, target, generation);
        tracing::debug!(
            path = %self.current.location,
            view = ?self.current.view,
            generation,
            "Navigated"
        );
        self.current.clone()
    }

    fn resolve_in(table: &RouteTable, target: &str, generation: u64) -> Activation {
        let matched = Location::parse(target).ok().and_then(|location| {
            table.resolve(location.path()).map(|route| Activation {
                view: route.view,
                location,
                generation,
                redirected: false,
            })
        });

        matched.unwrap_or_else(|| {
            let default = table.default_route();
            tracing::info!(
                requested = target,
                fallback = default.path,
                "No route matches, redirecting to default"
            );
            Activation {
                view: default.view,
                location: Location::at(default.path),
                generation,
                redirected: true,
            }
        })
    }
}
