//! Meeting requests: who must come, who may come, and for how long.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A request to find room for a meeting of `duration` minutes.
///
/// `attendees` are mandatory. `optional_attendees` are accommodated when
/// possible; the two sets may overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    attendees: BTreeSet<String>,
    #[serde(default)]
    optional_attendees: BTreeSet<String>,
    duration: u32,
}

impl MeetingRequest {
    /// Build a request with mandatory attendees only.
    pub fn new<I, S>(attendees: I, duration: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            attendees: attendees.into_iter().map(Into::into).collect(),
            optional_attendees: BTreeSet::new(),
            duration,
        }
    }

    /// Add optional attendees to the request.
    pub fn with_optional_attendees<I, S>(mut self, optional: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_attendees
            .extend(optional.into_iter().map(Into::into));
        self
    }

    pub fn attendees(&self) -> &BTreeSet<String> {
        &self.attendees
    }

    pub fn optional_attendees(&self) -> &BTreeSet<String> {
        &self.optional_attendees
    }

    /// Required meeting length in minutes.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Union of mandatory and optional attendees.
    pub fn all_attendees(&self) -> BTreeSet<String> {
        self.attendees
            .union(&self.optional_attendees)
            .cloned()
            .collect()
    }
}
