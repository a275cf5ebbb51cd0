//! Route generation strategies and route quality metrics.
//!
//! Given the catalog and a participant's selected event ids, the
//! generator returns three candidate routes, one per strategy, always in
//! the same order:
//!
//! 1. **EarliestFinish** — the classical interval-scheduling heuristic;
//!    maximizes event count on a single track when ties don't interact.
//! 2. **EarliestStart** — generally suboptimal, but starts the day as
//!    early as possible.
//! 3. **RandomizedRestart** — best of five shuffled passes.
//!
//! # Usage
//!
//! ```
//! use std::collections::HashSet;
//! use festival_routes::models::Event;
//! use festival_routes::routing::{RouteGenerator, Strategy};
//!
//! let events = vec![
//!     Event::new(1, "Parade").with_times("09:00", "10:00"),
//!     Event::new(2, "Choir").with_times("10:00", "11:00"),
//! ];
//! let selected: HashSet<u32> = [1, 2].into_iter().collect();
//!
//! let generator = RouteGenerator::new().with_seed(42);
//! let routes = generator.generate(&events, &selected);
//! assert_eq!(routes[0].ids(), vec![1, 2]);
//! ```
//!
//! # References
//!
//! - Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4.1: Interval Scheduling
//! - Motwani & Raghavan (1995), "Randomized Algorithms" (random restarts)

mod generator;
mod kpi;

pub use generator::{generate_schedules, RouteGenerator, Strategy};
pub use kpi::RouteKpi;
