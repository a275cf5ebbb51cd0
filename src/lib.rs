//! Festival route planning core.
//!
//! Participants select events from a shared catalog and receive three
//! candidate conflict-free schedules ("routes"); organizers maintain the
//! catalog. Route building is a greedy forward pass over differently
//! ordered event lists — see [`routing`] for the three strategies.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Event`, `NewEvent`, `EventPatch`, `Route`
//! - **`routing`**: Route generation strategies and route quality metrics
//! - **`catalog`**: JSON-file event store with organizer CRUD
//! - **`validation`**: Structural integrity checks over an event set
//!
//! # Example
//!
//! ```
//! use std::collections::HashSet;
//! use festival_routes::models::Event;
//! use festival_routes::routing::generate_schedules;
//!
//! let events = vec![
//!     Event::new(1, "Opening Ceremony").with_times("09:00", "10:00"),
//!     Event::new(2, "Craft Workshop").with_times("09:30", "11:00"),
//!     Event::new(3, "Main Stage Set").with_times("10:00", "11:00"),
//! ];
//! let selected: HashSet<u32> = [1, 2, 3].into_iter().collect();
//!
//! let routes = generate_schedules(&events, &selected);
//! assert_eq!(routes.len(), 3);
//! assert!(routes.iter().all(|r| r.is_conflict_free()));
//! ```
//!
//! # Reference
//!
//! Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4.1: Interval Scheduling

pub mod catalog;
pub mod models;
pub mod routing;
pub mod validation;
