//! Tests for the `TimeRange` value type.

use chrono::NaiveTime;
use meeting_solver::time_range::{
    order_by_end, order_by_start, time_in_minutes, END_OF_DAY, MINUTES_PER_DAY, START_OF_DAY,
};
use meeting_solver::{SchedulingError, TimeRange};

fn range(start: u32, end: u32) -> TimeRange {
    TimeRange::new(start, end).unwrap()
}

// ── Construction ────────────────────────────────────────────────────────────

#[test]
fn whole_day_spans_all_minutes() {
    assert_eq!(TimeRange::WHOLE_DAY.start(), START_OF_DAY);
    assert_eq!(TimeRange::WHOLE_DAY.end(), MINUTES_PER_DAY);
    assert_eq!(TimeRange::WHOLE_DAY.duration(), 1440);
}

#[test]
fn start_equal_to_end_is_rejected() {
    let err = TimeRange::new(60, 60).unwrap_err();
    assert!(matches!(err, SchedulingError::InvalidArgument(_)));
}

#[test]
fn start_after_end_is_rejected() {
    assert!(TimeRange::new(120, 60).is_err());
}

#[test]
fn end_past_day_is_rejected() {
    assert!(TimeRange::new(0, 1441).is_err());
    assert!(TimeRange::new(1400, MINUTES_PER_DAY).is_ok());
}

#[test]
fn inclusive_end_includes_last_minute() {
    let r = TimeRange::from_start_end(START_OF_DAY, END_OF_DAY, true).unwrap();
    assert_eq!(r, TimeRange::WHOLE_DAY);

    let exclusive = TimeRange::from_start_end(0, 60, false).unwrap();
    assert_eq!(exclusive.end(), 60);
}

#[test]
fn from_start_duration_computes_end() {
    let r = TimeRange::from_start_duration(540, 30).unwrap();
    assert_eq!(r, range(540, 570));
    assert_eq!(r.duration(), 30);
}

#[test]
fn from_start_duration_rejects_zero_and_overflow() {
    assert!(TimeRange::from_start_duration(540, 0).is_err());
    assert!(TimeRange::from_start_duration(1400, 60).is_err());
    assert!(TimeRange::from_start_duration(u32::MAX, 1).is_err());
}

#[test]
fn time_in_minutes_converts_wall_clock() {
    assert_eq!(time_in_minutes(0, 0).unwrap(), 0);
    assert_eq!(time_in_minutes(8, 30).unwrap(), 510);
    assert_eq!(time_in_minutes(23, 59).unwrap(), END_OF_DAY);
    assert!(time_in_minutes(24, 0).is_err());
    assert!(time_in_minutes(9, 60).is_err());
}

// ── Overlap & containment ───────────────────────────────────────────────────

#[test]
fn touching_ranges_do_not_overlap() {
    let a = range(0, 60);
    let b = range(60, 120);
    assert!(!a.overlaps(&b));
    assert!(!b.overlaps(&a));
}

#[test]
fn partially_overlapping_ranges_overlap_both_ways() {
    let a = range(0, 90);
    let b = range(60, 120);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn nested_range_overlaps_and_is_contained() {
    let outer = range(0, 600);
    let inner = range(100, 200);
    assert!(outer.overlaps(&inner));
    assert!(outer.contains(&inner));
    assert!(!inner.contains(&outer));
    assert!(outer.contains(&outer));
}

#[test]
fn contains_point_is_half_open() {
    let r = range(60, 120);
    assert!(r.contains_point(60));
    assert!(r.contains_point(119));
    assert!(!r.contains_point(120));
    assert!(!r.contains_point(59));
}

#[test]
fn span_covers_both_ranges() {
    assert_eq!(range(0, 60).span(&range(30, 90)), range(0, 90));
    assert_eq!(range(100, 200).span(&range(0, 10)), range(0, 200));
}

// ── Ordering & display ──────────────────────────────────────────────────────

#[test]
fn order_by_start_sorts_ascending() {
    let mut ranges = vec![range(300, 400), range(0, 1000), range(100, 110)];
    ranges.sort_by(order_by_start);
    assert_eq!(ranges, vec![range(0, 1000), range(100, 110), range(300, 400)]);
}

#[test]
fn order_by_end_sorts_ascending() {
    let mut ranges = vec![range(300, 400), range(0, 1000), range(100, 110)];
    ranges.sort_by(order_by_end);
    assert_eq!(ranges, vec![range(100, 110), range(300, 400), range(0, 1000)]);
}

#[test]
fn display_shows_half_open_bounds() {
    assert_eq!(range(60, 120).to_string(), "Range: [60, 120)");
}

#[test]
fn wall_clock_times() {
    let r = range(510, 1440);
    assert_eq!(r.start_time(), NaiveTime::from_hms_opt(8, 30, 0).unwrap());
    assert_eq!(r.end_time(), NaiveTime::from_hms_opt(0, 0, 0).unwrap());
}

// ── Serde ───────────────────────────────────────────────────────────────────

#[test]
fn serializes_as_start_end_object() {
    let json = serde_json::to_string(&range(60, 120)).unwrap();
    assert_eq!(json, r#"{"start":60,"end":120}"#);
}

#[test]
fn deserialization_validates_bounds() {
    let ok: TimeRange = serde_json::from_str(r#"{"start":0,"end":1440}"#).unwrap();
    assert_eq!(ok, TimeRange::WHOLE_DAY);

    let inverted = serde_json::from_str::<TimeRange>(r#"{"start":120,"end":60}"#);
    assert!(inverted.is_err());

    let negative = serde_json::from_str::<TimeRange>(r#"{"start":-5,"end":60}"#);
    assert!(negative.is_err());
}
