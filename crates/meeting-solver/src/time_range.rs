//! Half-open minute intervals on a single-day timeline.
//!
//! Every time value in this crate is a count of minutes from midnight. A day
//! runs from minute `0` up to, but not including, minute `1440`.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulingError};

/// Number of minutes in the modeled day; also the exclusive end of [`TimeRange::WHOLE_DAY`].
pub const MINUTES_PER_DAY: u32 = 1440;

/// First minute of the day.
pub const START_OF_DAY: u32 = 0;

/// Last minute of the day (inclusive).
pub const END_OF_DAY: u32 = MINUTES_PER_DAY - 1;

/// An immutable half-open interval `[start, end)` of minutes within one day.
///
/// # Invariants
/// `0 <= start < end <= 1440`. All constructors enforce this, including
/// deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawTimeRange")]
pub struct TimeRange {
    start: u32,
    end: u32,
}

/// Unvalidated wire shape; converted through [`TimeRange::new`].
#[derive(Deserialize)]
struct RawTimeRange {
    start: u32,
    end: u32,
}

impl TryFrom<RawTimeRange> for TimeRange {
    type Error = SchedulingError;

    fn try_from(raw: RawTimeRange) -> Result<Self> {
        TimeRange::new(raw.start, raw.end)
    }
}

impl TimeRange {
    /// The entire day, `[0, 1440)`.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: START_OF_DAY,
        end: MINUTES_PER_DAY,
    };

    /// Create the range `[start, end)`.
    ///
    /// # Errors
    /// Returns `SchedulingError::InvalidArgument` if `start >= end` or if `end`
    /// lies past the end of the day.
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if start >= end {
            return Err(SchedulingError::InvalidArgument(format!(
                "range start {} must be before end {}",
                start, end
            )));
        }
        if end > MINUTES_PER_DAY {
            return Err(SchedulingError::InvalidArgument(format!(
                "range end {} is past the end of the day ({})",
                end, MINUTES_PER_DAY
            )));
        }
        Ok(Self { start, end })
    }

    /// Build a range whose bounds the caller has already validated.
    pub(crate) fn new_unchecked(start: u32, end: u32) -> Self {
        debug_assert!(start < end && end <= MINUTES_PER_DAY);
        Self { start, end }
    }

    /// Create a range from two endpoints. When `inclusive` is true the `end`
    /// minute itself is part of the range, so `from_start_end(0, END_OF_DAY, true)`
    /// is the whole day.
    pub fn from_start_end(start: u32, end: u32, inclusive: bool) -> Result<Self> {
        if inclusive {
            Self::new(start, end.saturating_add(1))
        } else {
            Self::new(start, end)
        }
    }

    /// Create the range `[start, start + duration)`.
    pub fn from_start_duration(start: u32, duration: u32) -> Result<Self> {
        let end = start.checked_add(duration).ok_or_else(|| {
            SchedulingError::InvalidArgument(format!(
                "range {} + {} overflows",
                start, duration
            ))
        })?;
        Self::new(start, end)
    }

    /// Inclusive start minute.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Exclusive end minute.
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Length of the range in minutes.
    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    /// Two ranges overlap iff `self.start < other.end && other.start < self.end`.
    ///
    /// Ranges that merely touch (`[0, 60)` and `[60, 120)`) do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `minute` falls inside `[start, end)`.
    pub fn contains_point(&self, minute: u32) -> bool {
        self.start <= minute && minute < self.end
    }

    /// Whether `other` lies entirely within this range. A range contains itself.
    pub fn contains(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Smallest range covering both `self` and `other`.
    pub fn span(&self, other: &TimeRange) -> TimeRange {
        Self::new_unchecked(self.start.min(other.start), self.end.max(other.end))
    }

    /// Wall-clock time of the start minute.
    pub fn start_time(&self) -> NaiveTime {
        minute_to_time(self.start)
    }

    /// Wall-clock time of the end minute. The end of the day wraps to `00:00`.
    pub fn end_time(&self) -> NaiveTime {
        minute_to_time(self.end)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Range: [{}, {})", self.start, self.end)
    }
}

/// Comparator ordering ranges by start minute, for use with `sort_by`.
pub fn order_by_start(a: &TimeRange, b: &TimeRange) -> Ordering {
    a.start.cmp(&b.start)
}

/// Comparator ordering ranges by end minute, for use with `sort_by`.
pub fn order_by_end(a: &TimeRange, b: &TimeRange) -> Ordering {
    a.end.cmp(&b.end)
}

/// Convert a wall-clock `hours:minutes` into minutes from midnight.
///
/// # Errors
/// Returns `SchedulingError::InvalidArgument` when `hours > 23` or `minutes > 59`.
pub fn time_in_minutes(hours: u32, minutes: u32) -> Result<u32> {
    if hours >= 24 || minutes >= 60 {
        return Err(SchedulingError::InvalidArgument(format!(
            "{}:{:02} is not a time of day",
            hours, minutes
        )));
    }
    Ok(hours * 60 + minutes)
}

fn minute_to_time(minute: u32) -> NaiveTime {
    NaiveTime::from_num_seconds_from_midnight_opt((minute % MINUTES_PER_DAY) * 60, 0)
        .unwrap_or_default()
}
