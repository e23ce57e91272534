//! Fixed calendar commitments.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::time_range::TimeRange;

/// An existing commitment occupying `when` for every attendee in `attendees`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    title: String,
    when: TimeRange,
    attendees: BTreeSet<String>,
}

impl Event {
    /// Build an event. Duplicate attendee names collapse into one.
    pub fn new<I, S>(title: impl Into<String>, when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn when(&self) -> TimeRange {
        self.when
    }

    pub fn attendees(&self) -> &BTreeSet<String> {
        &self.attendees
    }

    /// Whether at least one of `people` attends this event.
    pub fn involves_any(&self, people: &BTreeSet<String>) -> bool {
        // Iterate the smaller set and probe the larger one.
        if people.len() < self.attendees.len() {
            people.iter().any(|p| self.attendees.contains(p))
        } else {
            self.attendees.iter().any(|p| people.contains(p))
        }
    }
}
