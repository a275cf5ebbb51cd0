//! Festival domain models.
//!
//! Provides the core data types shared by the catalog and the route
//! generator. Events carry wall-clock `"HH:MM"` times and are compared
//! lexicographically — see [`Event`] for why that is safe.
//!
//! # Types
//!
//! | Type | Role |
//! |------|------|
//! | [`Event`] | Catalog entry participants can select |
//! | [`NewEvent`] | Organizer submission, id not yet assigned |
//! | [`EventPatch`] | Partial organizer edit |
//! | [`Route`] | Conflict-free candidate schedule |

mod event;
mod route;

pub use event::{clock_minutes, Event, EventPatch, NewEvent};
pub use route::Route;
