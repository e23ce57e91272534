//! Meeting-time queries with optional-attendee fallback.
//!
//! A query first tries to fit everyone, mandatory and optional. If that leaves
//! no viable slot and the request names at least one mandatory attendee, the
//! optional attendees are dropped and the search runs again. Optional
//! attendees are accommodated when possible but never block a meeting that
//! the mandatory attendees alone could hold.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::freebusy;
use crate::request::MeetingRequest;
use crate::time_range::{TimeRange, MINUTES_PER_DAY};

/// Which attendee set produced a query result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendeePolicy {
    /// Mandatory and optional attendees were all considered.
    WithOptional,
    /// Optional attendees were dropped after the first pass found nothing.
    MandatoryOnly,
}

/// Result of a query, with the attendee policy that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    /// Free ranges long enough for the meeting, sorted by start, disjoint.
    pub ranges: Vec<TimeRange>,
    /// The attendee set the ranges were computed against.
    pub policy: AttendeePolicy,
}

/// Stateless solver for meeting availability.
///
/// Holds no data; every call is a pure function of its arguments and may run
/// concurrently with any other.
#[derive(Debug, Clone, Copy, Default)]
pub struct AvailabilitySolver;

impl AvailabilitySolver {
    pub fn new() -> Self {
        Self
    }

    /// Every time range in which the requested meeting fits.
    ///
    /// Returns ranges sorted by start, each at least `request.duration()`
    /// minutes long. A request longer than a day yields an empty list.
    pub fn query(&self, events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
        self.query_detailed(events, request).ranges
    }

    /// Like [`query`](Self::query), also reporting whether optional attendees
    /// were kept.
    pub fn query_detailed(&self, events: &[Event], request: &MeetingRequest) -> Availability {
        if request.duration() > MINUTES_PER_DAY {
            tracing::debug!(
                duration = request.duration(),
                "requested duration exceeds one day"
            );
            return Availability {
                ranges: Vec::new(),
                policy: AttendeePolicy::WithOptional,
            };
        }

        let everyone = request.all_attendees();
        let ranges = available_ranges(events, &everyone, request.duration());
        tracing::debug!(
            attendees = everyone.len(),
            slots = ranges.len(),
            "computed availability with optional attendees"
        );

        if ranges.is_empty() && !request.attendees().is_empty() {
            let ranges = available_ranges(events, request.attendees(), request.duration());
            tracing::debug!(
                attendees = request.attendees().len(),
                slots = ranges.len(),
                "no slot fits optional attendees, fell back to mandatory only"
            );
            return Availability {
                ranges,
                policy: AttendeePolicy::MandatoryOnly,
            };
        }

        Availability {
            ranges,
            policy: AttendeePolicy::WithOptional,
        }
    }
}

/// Convenience wrapper around [`AvailabilitySolver::query`].
pub fn find_meeting_times(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    AvailabilitySolver::new().query(events, request)
}

/// Free ranges of at least `duration` minutes for the given attendee set.
///
/// Callers guarantee `duration <= MINUTES_PER_DAY`, so the whole day always fits.
fn available_ranges(
    events: &[Event],
    attendees: &BTreeSet<String>,
    duration: u32,
) -> Vec<TimeRange> {
    if attendees.is_empty() {
        return vec![TimeRange::WHOLE_DAY];
    }

    let busy = freebusy::busy_ranges(events, attendees);
    if busy.is_empty() {
        return vec![TimeRange::WHOLE_DAY];
    }

    let merged = freebusy::merge_busy_ranges(&busy);
    tracing::trace!(?merged, "merged busy ranges");

    freebusy::filter_by_duration(freebusy::free_ranges(&merged), duration)
}
