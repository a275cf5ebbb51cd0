//! Input validation for the event catalog.
//!
//! Checks structural integrity of an event set before it reaches the
//! route generator. Detects:
//! - Duplicate event ids
//! - Time fields outside the zero-padded 24-hour `"HH:MM"` format
//! - Inverted intervals (start at or after end)
//!
//! The generator itself never validates — it assumes a well-formed
//! catalog and degrades silently otherwise, so callers that accept
//! organizer input should run these checks first.

use std::collections::HashSet;

use crate::models::{clock_minutes, Event};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two events share the same id.
    DuplicateId,
    /// A time field is not zero-padded 24-hour `"HH:MM"`.
    MalformedTime,
    /// An event starts at or after its own end.
    InvertedInterval,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates an event set.
///
/// Checks:
/// 1. No duplicate event ids
/// 2. Every `start_time` and `end_time` parses as `"HH:MM"`
/// 3. `start_time < end_time` for every event
///
/// The advisory `duration` field is deliberately not cross-checked
/// against the interval.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_events(events: &[Event]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut seen_ids = HashSet::new();
    for event in events {
        if !seen_ids.insert(event.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate event id: {}", event.id),
            ));
        }

        let start = clock_minutes(&event.start_time);
        let end = clock_minutes(&event.end_time);

        if start.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedTime,
                format!(
                    "Event {} has malformed start_time '{}'",
                    event.id, event.start_time
                ),
            ));
        }
        if end.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedTime,
                format!(
                    "Event {} has malformed end_time '{}'",
                    event.id, event.end_time
                ),
            ));
        }

        if let (Some(start), Some(end)) = (start, end) {
            if start >= end {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvertedInterval,
                    format!(
                        "Event {} starts at or after its end ({} >= {})",
                        event.id, event.start_time, event.end_time
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
