//! Event model.
//!
//! An event is the unit participants pick from the catalog: a named
//! happening at a location with a wall-clock start and end.
//!
//! # Time Representation
//!
//! Start and end times are zero-padded 24-hour `"HH:MM"` strings and are
//! compared lexicographically. This is a deliberate simplification: the
//! comparison is only valid because every time in the catalog uses the
//! fixed format. `validation::validate_events` rejects anything else
//! before it reaches the route generator.

use serde::{Deserialize, Serialize};

/// A festival event.
///
/// `duration` is advisory metadata in minutes, supplied by the organizer
/// UI. Conflict checks use only `start_time` and `end_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event identifier (positive).
    pub id: u32,
    /// Human-readable name.
    pub name: String,
    /// Start time, zero-padded 24-hour `"HH:MM"`.
    pub start_time: String,
    /// End time, zero-padded 24-hour `"HH:MM"`.
    pub end_time: String,
    /// Venue or stage name.
    pub location: String,
    /// Advisory length in minutes. Not used by conflict checks.
    pub duration: i64,
}

impl Event {
    /// Creates a new event with the given id and name.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            start_time: String::new(),
            end_time: String::new(),
            location: String::new(),
            duration: 0,
        }
    }

    /// Sets start and end times (`"HH:MM"`).
    pub fn with_times(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_time = start.into();
        self.end_time = end.into();
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the advisory duration in minutes.
    pub fn with_duration(mut self, minutes: i64) -> Self {
        self.duration = minutes;
        self
    }
}

/// An organizer's event submission, before the catalog assigns an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEvent {
    /// Human-readable name.
    pub name: String,
    /// Start time, `"HH:MM"`.
    pub start_time: String,
    /// End time, `"HH:MM"`.
    pub end_time: String,
    /// Venue or stage name.
    pub location: String,
    /// Advisory length in minutes.
    pub duration: i64,
}

impl NewEvent {
    /// Creates a new submission with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start_time: String::new(),
            end_time: String::new(),
            location: String::new(),
            duration: 0,
        }
    }

    /// Sets start and end times (`"HH:MM"`).
    pub fn with_times(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_time = start.into();
        self.end_time = end.into();
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the advisory duration in minutes.
    pub fn with_duration(mut self, minutes: i64) -> Self {
        self.duration = minutes;
        self
    }

    /// Promotes the submission to a catalog event under the given id.
    pub fn into_event(self, id: u32) -> Event {
        Event {
            id,
            name: self.name,
            start_time: self.start_time,
            end_time: self.end_time,
            location: self.location,
            duration: self.duration,
        }
    }
}

/// A partial update to an existing event.
///
/// Only the supplied fields are changed; `None` leaves the current value
/// in place. Mirrors the field-merge semantics of the organizer edit form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventPatch {
    /// New name, if changed.
    pub name: Option<String>,
    /// New start time, if changed.
    pub start_time: Option<String>,
    /// New end time, if changed.
    pub end_time: Option<String>,
    /// New location, if changed.
    pub location: Option<String>,
    /// New advisory duration, if changed.
    pub duration: Option<i64>,
}

impl EventPatch {
    /// Applies the patch to an event, field by field.
    pub fn apply(&self, event: &mut Event) {
        if let Some(name) = &self.name {
            event.name = name.clone();
        }
        if let Some(start) = &self.start_time {
            event.start_time = start.clone();
        }
        if let Some(end) = &self.end_time {
            event.end_time = end.clone();
        }
        if let Some(location) = &self.location {
            event.location = location.clone();
        }
        if let Some(duration) = self.duration {
            event.duration = duration;
        }
    }
}

/// Parses a zero-padded 24-hour `"HH:MM"` string into minutes since midnight.
///
/// Returns `None` for anything outside the fixed format (wrong length,
/// missing colon, non-digits, hour ≥ 24, minute ≥ 60). Used by validation
/// and KPIs; the conflict rule itself compares the raw strings.
pub fn clock_minutes(value: &str) -> Option<i64> {
    let bytes = value.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }
    if !bytes[0].is_ascii_digit()
        || !bytes[1].is_ascii_digit()
        || !bytes[3].is_ascii_digit()
        || !bytes[4].is_ascii_digit()
    {
        return None;
    }
    let hours = i64::from(bytes[0] - b'0') * 10 + i64::from(bytes[1] - b'0');
    let minutes = i64::from(bytes[3] - b'0') * 10 + i64::from(bytes[4] - b'0');
    if hours >= 24 || minutes >= 60 {
        return None;
    }
    Some(hours * 60 + minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_builder() {
        let event = Event::new(7, "Fire Show")
            .with_times("21:30", "22:15")
            .with_location("Lakeside")
            .with_duration(45);

        assert_eq!(event.id, 7);
        assert_eq!(event.name, "Fire Show");
        assert_eq!(event.start_time, "21:30");
        assert_eq!(event.end_time, "22:15");
        assert_eq!(event.location, "Lakeside");
        assert_eq!(event.duration, 45);
    }

    #[test]
    fn test_new_event_into_event() {
        let event = NewEvent::new("Poetry Slam")
            .with_times("18:00", "19:00")
            .with_location("Tent B")
            .with_duration(60)
            .into_event(12);

        assert_eq!(event.id, 12);
        assert_eq!(event.name, "Poetry Slam");
        assert_eq!(event.start_time, "18:00");
        assert_eq!(event.end_time, "19:00");
    }

    #[test]
    fn test_patch_applies_only_supplied_fields() {
        let mut event = Event::new(1, "Old Name")
            .with_times("09:00", "10:00")
            .with_location("Stage A")
            .with_duration(60);

        let patch = EventPatch {
            name: Some("New Name".into()),
            end_time: Some("10:30".into()),
            duration: Some(90),
            ..EventPatch::default()
        };
        patch.apply(&mut event);

        assert_eq!(event.name, "New Name");
        assert_eq!(event.start_time, "09:00"); // untouched
        assert_eq!(event.end_time, "10:30");
        assert_eq!(event.location, "Stage A"); // untouched
        assert_eq!(event.duration, 90);
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut event = Event::new(1, "Keep").with_times("09:00", "10:00");
        let original = event.clone();
        EventPatch::default().apply(&mut event);
        assert_eq!(event, original);
    }

    #[test]
    fn test_clock_minutes_valid() {
        assert_eq!(clock_minutes("00:00"), Some(0));
        assert_eq!(clock_minutes("09:30"), Some(570));
        assert_eq!(clock_minutes("23:59"), Some(1439));
    }

    #[test]
    fn test_clock_minutes_rejects_malformed() {
        assert_eq!(clock_minutes(""), None);
        assert_eq!(clock_minutes("9:30"), None); // not zero-padded
        assert_eq!(clock_minutes("09-30"), None);
        assert_eq!(clock_minutes("24:00"), None);
        assert_eq!(clock_minutes("12:60"), None);
        assert_eq!(clock_minutes("12:345"), None);
        assert_eq!(clock_minutes("ab:cd"), None);
    }

    #[test]
    fn test_event_serde_round_trip() {
        let event = Event::new(3, "Jazz Trio")
            .with_times("14:00", "15:30")
            .with_location("Bandstand")
            .with_duration(90);

        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_event_deserializes_catalog_shape() {
        // The on-disk shape used by the organizer backend.
        let json = r#"{
            "id": 1,
            "name": "Opening Ceremony",
            "start_time": "09:00",
            "end_time": "10:00",
            "location": "Main Stage",
            "duration": 60
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, 1);
        assert_eq!(event.start_time, "09:00");
        assert_eq!(event.duration, 60);
    }
}
