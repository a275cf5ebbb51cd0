//! Route (candidate schedule) model.
//!
//! A route is an ordered sequence of non-overlapping events, listed in
//! the order a strategy accepted them — which for a single forward pass
//! is also chronological. Routes are built fresh per request and never
//! persisted.

use serde::{Deserialize, Serialize};

use super::Event;

/// A conflict-free sequence of events.
///
/// Invariant (maintained by the forward pass, checkable via
/// [`Route::is_conflict_free`]): for any two consecutive events the next
/// one starts at or after the previous one ends. Back-to-back events are
/// allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Accepted events, in acceptance order.
    pub events: Vec<Event>,
}

impl Route {
    /// Creates an empty route.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an accepted event.
    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Number of events in the route.
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Whether the route holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Whether the route contains the given event id.
    pub fn contains(&self, id: u32) -> bool {
        self.events.iter().any(|e| e.id == id)
    }

    /// Iterates over the events in acceptance order.
    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    /// Event ids in acceptance order.
    pub fn ids(&self) -> Vec<u32> {
        self.events.iter().map(|e| e.id).collect()
    }

    /// Checks the no-overlap invariant over consecutive events.
    ///
    /// Times are compared lexicographically, which matches chronological
    /// order for the fixed `"HH:MM"` format.
    pub fn is_conflict_free(&self) -> bool {
        self.events
            .windows(2)
            .all(|pair| pair[1].start_time >= pair[0].end_time)
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
