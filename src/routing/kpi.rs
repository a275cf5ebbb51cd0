//! Route quality metrics.
//!
//! Computes simple indicators for presenting the three candidate routes
//! side by side.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Event Count | Accepted events |
//! | Busy Minutes | Sum of interval lengths |
//! | Span Minutes | First start to last end |
//! | Idle Minutes | Span − busy (gaps between events) |

use crate::models::{clock_minutes, Route};

/// Performance indicators for one candidate route.
///
/// All values are in minutes. Events whose times fail to parse
/// contribute nothing — KPIs degrade rather than fail, matching the
/// generator's tolerance of malformed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteKpi {
    /// Number of accepted events.
    pub event_count: usize,
    /// Total minutes spent in events.
    pub busy_minutes: i64,
    /// Minutes from the first start to the last end.
    pub span_minutes: i64,
    /// Minutes of gap time inside the span.
    pub idle_minutes: i64,
}

impl RouteKpi {
    /// Computes KPIs for a route.
    pub fn calculate(route: &Route) -> Self {
        let mut busy: i64 = 0;
        for event in route {
            if let (Some(start), Some(end)) = (
                clock_minutes(&event.start_time),
                clock_minutes(&event.end_time),
            ) {
                busy += (end - start).max(0);
            }
        }

        let span = match (route.events.first(), route.events.last()) {
            (Some(first), Some(last)) => {
                match (clock_minutes(&first.start_time), clock_minutes(&last.end_time)) {
                    (Some(start), Some(end)) => (end - start).max(0),
                    _ => 0,
                }
            }
            _ => 0,
        };

        Self {
            event_count: route.event_count(),
            busy_minutes: busy,
            span_minutes: span,
            idle_minutes: (span - busy).max(0),
        }
    }
}
