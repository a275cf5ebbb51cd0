//! Greedy route builders over a selected event subset.
//!
//! # Algorithm
//!
//! All strategies share one conflict rule, applied in a single forward
//! pass: a cursor holds the end time of the last accepted event
//! (initially `"00:00"`), and an event is accepted only if it starts at
//! or after the cursor. A rejected event is never reconsidered and the
//! pass never looks ahead. The strategies differ only in the order
//! events are fed to the pass.
//!
//! # Complexity
//! O(n log n) per sorted strategy, O(t * n) for t shuffle trials.
//!
//! # Reference
//! Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4.1

use std::collections::HashSet;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::models::{Event, Route};

/// Cursor value before any event is accepted.
const DAY_START: &str = "00:00";

/// Default number of shuffle trials for [`Strategy::RandomizedRestart`].
const DEFAULT_TRIALS: usize = 5;

/// A route-building heuristic.
///
/// Runtime-selectable, dispatched by match. [`RouteGenerator::generate`]
/// runs all three in the order of [`Strategy::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Sort by end time ascending, then forward pass.
    EarliestFinish,
    /// Sort by start time ascending, then forward pass.
    EarliestStart,
    /// Best of several uniformly shuffled forward passes.
    RandomizedRestart,
}

impl Strategy {
    /// All strategies, in the fixed output order.
    pub const ALL: [Strategy; 3] = [
        Strategy::EarliestFinish,
        Strategy::EarliestStart,
        Strategy::RandomizedRestart,
    ];

    /// Strategy name.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::EarliestFinish => "earliest-finish",
            Strategy::EarliestStart => "earliest-start",
            Strategy::RandomizedRestart => "randomized-restart",
        }
    }
}

/// Builds candidate routes from a participant's selection.
///
/// Pure over its inputs: events are filtered and cloned, never mutated,
/// and no state is shared between invocations. Seed the generator for
/// reproducible shuffles; unseeded generators draw from the thread RNG.
///
/// # Example
///
/// ```
/// use std::collections::HashSet;
/// use festival_routes::models::Event;
/// use festival_routes::routing::RouteGenerator;
///
/// let events = vec![Event::new(1, "Parade").with_times("09:00", "10:00")];
/// let selected: HashSet<u32> = [1].into_iter().collect();
///
/// let routes = RouteGenerator::new().generate(&events, &selected);
/// assert_eq!(routes.len(), 3);
/// assert!(routes.iter().all(|r| r.event_count() == 1));
/// ```
#[derive(Debug, Clone)]
pub struct RouteGenerator {
    trials: usize,
    seed: Option<u64>,
}

impl RouteGenerator {
    /// Creates a generator with the default trial count and no seed.
    pub fn new() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
        }
    }

    /// Sets the number of shuffle trials for the randomized strategy.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Sets a fixed RNG seed for reproducible shuffles.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the three candidate routes for a selection.
    ///
    /// Filters `events` down to those whose id is in `selected_ids`
    /// (unknown ids are ignored), then runs every strategy over the
    /// subset. Always returns exactly three routes in [`Strategy::ALL`]
    /// order; an empty subset yields three empty routes.
    pub fn generate(&self, events: &[Event], selected_ids: &HashSet<u32>) -> Vec<Route> {
        let selected: Vec<Event> = events
            .iter()
            .filter(|e| selected_ids.contains(&e.id))
            .cloned()
            .collect();

        let mut rng = self.rng();
        Strategy::ALL
            .iter()
            .map(|&strategy| self.build(strategy, &selected, &mut rng))
            .collect()
    }

    /// Builds a single route with one strategy over an already-filtered
    /// event list.
    pub fn route(&self, strategy: Strategy, events: &[Event]) -> Route {
        let mut rng = self.rng();
        self.build(strategy, events, &mut rng)
    }

    fn build(&self, strategy: Strategy, events: &[Event], rng: &mut SmallRng) -> Route {
        match strategy {
            Strategy::EarliestFinish => earliest_finish_route(events),
            Strategy::EarliestStart => earliest_start_route(events),
            Strategy::RandomizedRestart => randomized_restart_route(events, self.trials, rng),
        }
    }

    fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        }
    }
}

impl Default for RouteGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the three candidate routes with a default generator.
///
/// Convenience entry point matching the request handler's contract:
/// full catalog in, selected ids in, three routes out.
pub fn generate_schedules(events: &[Event], selected_ids: &HashSet<u32>) -> Vec<Route> {
    RouteGenerator::new().generate(events, selected_ids)
}

/// The shared conflict rule: one greedy pass over an ordered event list.
fn forward_pass<'a, I>(ordered: I) -> Route
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut route = Route::new();
    let mut last_end = DAY_START.to_string();

    for event in ordered {
        if event.start_time >= last_end {
            last_end = event.end_time.clone();
            route.push(event.clone());
        }
    }

    route
}

/// Earliest-finish-first: the classical interval-scheduling heuristic.
///
/// The sort is stable, so events sharing an end time keep their catalog
/// order.
fn earliest_finish_route(events: &[Event]) -> Route {
    let mut ordered: Vec<&Event> = events.iter().collect();
    ordered.sort_by(|a, b| a.end_time.cmp(&b.end_time));
    forward_pass(ordered)
}

/// Earliest-start-first: for participants who want to start early.
fn earliest_start_route(events: &[Event]) -> Route {
    let mut ordered: Vec<&Event> = events.iter().collect();
    ordered.sort_by(|a, b| a.start_time.cmp(&b.start_time));
    forward_pass(ordered)
}

/// Random-restart: best of `trials` uniformly shuffled passes.
///
/// Ties keep the earliest trial (strict `>` comparison), so a seeded run
/// is fully deterministic.
fn randomized_restart_route<R: Rng>(events: &[Event], trials: usize, rng: &mut R) -> Route {
    let mut best = Route::new();
    let mut pool: Vec<&Event> = events.iter().collect();

    for _ in 0..trials {
        pool.shuffle(rng);
        let candidate = forward_pass(pool.iter().copied());
        if candidate.event_count() > best.event_count() {
            best = candidate;
        }
    }

    best
}
