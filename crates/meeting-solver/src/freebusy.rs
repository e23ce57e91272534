//! Busy-interval merging and free-time inversion.
//!
//! Projects the events that involve a set of attendees onto their time ranges,
//! merges overlapping busy ranges, then computes the gaps between merged ranges
//! across the whole day.

use std::collections::BTreeSet;

use crate::event::Event;
use crate::time_range::{order_by_start, TimeRange, MINUTES_PER_DAY};

/// Time ranges of every event attended by at least one of `attendees`.
pub fn busy_ranges(events: &[Event], attendees: &BTreeSet<String>) -> Vec<TimeRange> {
    events
        .iter()
        .filter(|e| e.involves_any(attendees))
        .map(Event::when)
        .collect()
}

/// Merge overlapping busy ranges.
///
/// Returns a sorted, non-overlapping list. Ranges that only touch stay separate;
/// they leave no gap between them, so inversion is unaffected.
pub fn merge_busy_ranges(ranges: &[TimeRange]) -> Vec<TimeRange> {
    let mut sorted = ranges.to_vec();
    sorted.sort_by(order_by_start);

    let mut merged: Vec<TimeRange> = Vec::with_capacity(sorted.len());
    for range in sorted {
        if let Some(last) = merged.last_mut() {
            if last.overlaps(&range) {
                // Overlapping: extend the current merged range.
                *last = last.span(&range);
                continue;
            }
        }
        merged.push(range);
    }

    merged
}

/// Invert sorted, disjoint busy ranges against the whole day.
///
/// Returns free ranges sorted by start. Zero-length gaps are never emitted.
pub fn free_ranges(merged: &[TimeRange]) -> Vec<TimeRange> {
    let mut free = Vec::with_capacity(merged.len() + 1);
    let mut cursor = 0;

    for busy in merged {
        if cursor < busy.start() {
            free.push(TimeRange::new_unchecked(cursor, busy.start()));
        }
        cursor = cursor.max(busy.end());
    }

    // Trailing free range after the last busy period.
    if cursor < MINUTES_PER_DAY {
        free.push(TimeRange::new_unchecked(cursor, MINUTES_PER_DAY));
    }

    free
}

/// Keep only ranges at least `duration` minutes long.
pub fn filter_by_duration(ranges: Vec<TimeRange>, duration: u32) -> Vec<TimeRange> {
    ranges
        .into_iter()
        .filter(|r| r.duration() >= duration)
        .collect()
}
