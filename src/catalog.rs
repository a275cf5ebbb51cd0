//! JSON-file event catalog.
//!
//! The catalog is a flat JSON array of events on disk, rewritten in full
//! on every change — the planner's data set is small and the surrounding
//! server serializes access. Organizer operations: add (with max+1 id
//! assignment), partial update, remove.
//!
//! A missing catalog file reads as an empty catalog; malformed JSON is
//! an error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;

use crate::models::{Event, EventPatch, NewEvent};

/// Errors raised by catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read or written.
    #[error("failed to access catalog file {}: {source}", path.display())]
    Io {
        /// Catalog file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The catalog file exists but is not a valid event list.
    #[error("catalog file {} is not a valid event list: {source}", path.display())]
    Malformed {
        /// Catalog file path.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// An operation referenced an event id not present in the catalog.
    #[error("event {0} not found in catalog")]
    EventNotFound(u32),
}

/// Catalog operation result.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// A JSON-file-backed event store.
///
/// # Example
///
/// ```no_run
/// use festival_routes::catalog::EventCatalog;
/// use festival_routes::models::NewEvent;
///
/// let catalog = EventCatalog::new("data.json");
/// let event = catalog.add_event(
///     NewEvent::new("Lantern Parade")
///         .with_times("20:00", "21:00")
///         .with_location("River Walk")
///         .with_duration(60),
/// )?;
/// assert!(event.id >= 1);
/// # Ok::<(), festival_routes::catalog::CatalogError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EventCatalog {
    path: PathBuf,
}

impl EventCatalog {
    /// Creates a catalog over the given file path.
    ///
    /// The file is not touched until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The catalog file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all known events.
    ///
    /// A missing file yields an empty catalog so that a fresh
    /// installation works without seeding.
    pub fn load_events(&self) -> CatalogResult<Vec<Event>> {
        if !self.path.exists() {
            warn!(
                "catalog file {} does not exist; returning empty catalog",
                self.path.display()
            );
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;
        let events: Vec<Event> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        debug!("loaded {} events from {}", events.len(), self.path.display());
        Ok(events)
    }

    /// Rewrites the catalog file with the given events (pretty-printed).
    pub fn save_events(&self, events: &[Event]) -> CatalogResult<()> {
        let raw = serde_json::to_string_pretty(events).map_err(|source| CatalogError::Malformed {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, raw).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;

        debug!("saved {} events to {}", events.len(), self.path.display());
        Ok(())
    }

    /// Adds an organizer submission, assigning the next free id.
    ///
    /// Ids are `max(existing) + 1`, starting at 1 for an empty catalog.
    /// Removed ids can therefore be reused once the maximum drops.
    pub fn add_event(&self, submission: NewEvent) -> CatalogResult<Event> {
        let mut events = self.load_events()?;
        let id = events.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        let event = submission.into_event(id);

        events.push(event.clone());
        self.save_events(&events)?;
        debug!("added event {} '{}'", event.id, event.name);
        Ok(event)
    }

    /// Applies a partial update to an existing event.
    ///
    /// Returns the updated event, or [`CatalogError::EventNotFound`].
    pub fn update_event(&self, id: u32, patch: EventPatch) -> CatalogResult<Event> {
        let mut events = self.load_events()?;
        let event = events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(CatalogError::EventNotFound(id))?;

        patch.apply(event);
        let updated = event.clone();
        self.save_events(&events)?;
        debug!("updated event {}", id);
        Ok(updated)
    }

    /// Removes an event by id.
    ///
    /// Returns `true` if an event was removed, `false` if the id was
    /// unknown (not an error, matching the organizer UI's idempotent
    /// delete).
    pub fn remove_event(&self, id: u32) -> CatalogResult<bool> {
        let mut events = self.load_events()?;
        let before = events.len();
        events.retain(|e| e.id != id);

        let removed = events.len() != before;
        if removed {
            self.save_events(&events)?;
            debug!("removed event {}", id);
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_catalog() -> (TempDir, EventCatalog) {
        let dir = TempDir::new().unwrap();
        let catalog = EventCatalog::new(dir.path().join("data.json"));
        (dir, catalog)
    }

    fn submission(name: &str, start: &str, end: &str) -> NewEvent {
        NewEvent::new(name)
            .with_times(start, end)
            .with_location("Main Stage")
            .with_duration(60)
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let (_dir, catalog) = temp_catalog();
        assert!(catalog.load_events().unwrap().is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let (_dir, catalog) = temp_catalog();
        let events = vec![
            Event::new(1, "Opening").with_times("09:00", "10:00"),
            Event::new(2, "Workshop").with_times("10:00", "11:30"),
        ];

        catalog.save_events(&events).unwrap();
        assert_eq!(catalog.load_events().unwrap(), events);
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let (_dir, catalog) = temp_catalog();

        let first = catalog.add_event(submission("First", "09:00", "10:00")).unwrap();
        let second = catalog.add_event(submission("Second", "10:00", "11:00")).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(catalog.load_events().unwrap().len(), 2);
    }

    #[test]
    fn test_add_uses_max_plus_one() {
        let (_dir, catalog) = temp_catalog();
        catalog
            .save_events(&[Event::new(7, "Sparse").with_times("09:00", "10:00")])
            .unwrap();

        let added = catalog.add_event(submission("Next", "10:00", "11:00")).unwrap();
        assert_eq!(added.id, 8);
    }

    #[test]
    fn test_update_patches_fields() {
        let (_dir, catalog) = temp_catalog();
        catalog.add_event(submission("Original", "09:00", "10:00")).unwrap();

        let patch = EventPatch {
            name: Some("Renamed".into()),
            location: Some("Tent B".into()),
            ..EventPatch::default()
        };
        let updated = catalog.update_event(1, patch).unwrap();

        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.location, "Tent B");
        assert_eq!(updated.start_time, "09:00"); // untouched

        let reloaded = catalog.load_events().unwrap();
        assert_eq!(reloaded[0].name, "Renamed");
    }

    #[test]
    fn test_update_unknown_id() {
        let (_dir, catalog) = temp_catalog();
        let err = catalog.update_event(42, EventPatch::default()).unwrap_err();
        assert!(matches!(err, CatalogError::EventNotFound(42)));
    }

    #[test]
    fn test_remove_event() {
        let (_dir, catalog) = temp_catalog();
        catalog.add_event(submission("Doomed", "09:00", "10:00")).unwrap();

        assert!(catalog.remove_event(1).unwrap());
        assert!(catalog.load_events().unwrap().is_empty());
    }

    #[test]
    fn test_remove_unknown_id_is_false() {
        let (_dir, catalog) = temp_catalog();
        assert!(!catalog.remove_event(42).unwrap());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let (_dir, catalog) = temp_catalog();
        fs::write(catalog.path(), "{ not json ]").unwrap();

        let err = catalog.load_events().unwrap_err();
        assert!(matches!(err, CatalogError::Malformed { .. }));
    }

    #[test]
    fn test_saved_file_is_pretty_printed() {
        let (_dir, catalog) = temp_catalog();
        catalog
            .save_events(&[Event::new(1, "Opening").with_times("09:00", "10:00")])
            .unwrap();

        let raw = fs::read_to_string(catalog.path()).unwrap();
        assert!(raw.contains('\n'));
        assert!(raw.contains("\"start_time\": \"09:00\""));
    }
}
