//! Tests for the half-open `Interval` type.

use availability_engine::{EngineError, Interval, MINUTES_PER_DAY, WHOLE_DAY};

fn iv(start: u32, end: u32) -> Interval {
    Interval::new(start, end).unwrap()
}

#[test]
fn whole_day_spans_every_minute() {
    assert_eq!(WHOLE_DAY.start(), 0);
    assert_eq!(WHOLE_DAY.end(), MINUTES_PER_DAY);
    assert_eq!(WHOLE_DAY.duration(), 1440);
    assert_eq!(Interval::WHOLE_DAY, WHOLE_DAY);
}

#[test]
fn empty_and_inverted_ranges_are_rejected() {
    assert_eq!(
        Interval::new(60, 60),
        Err(EngineError::InvalidInterval { start: 60, end: 60 })
    );
    assert_eq!(
        Interval::new(90, 30),
        Err(EngineError::InvalidInterval { start: 90, end: 30 })
    );
}

#[test]
fn inclusive_end_is_extended_by_one_minute() {
    let inclusive = Interval::from_start_end(60, 119, true).unwrap();
    assert_eq!(inclusive, iv(60, 120));
    assert_eq!(inclusive.duration(), 60);

    let exclusive = Interval::from_start_end(60, 119, false).unwrap();
    assert_eq!(exclusive, iv(60, 119));
}

#[test]
fn inclusive_single_minute_is_valid() {
    // [60, 60] inclusive is the single minute 60.
    assert_eq!(Interval::from_start_end(60, 60, true).unwrap(), iv(60, 61));
}

#[test]
fn inclusive_end_at_u32_max_overflows() {
    assert_eq!(
        Interval::from_start_end(0, u32::MAX, true),
        Err(EngineError::BoundaryOverflow { end: u32::MAX })
    );
}

#[test]
fn overlap_is_symmetric_and_excludes_adjacency() {
    let a = iv(0, 60);
    let b = iv(30, 90);
    let c = iv(60, 120);

    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
    assert!(!a.overlaps(&c), "adjacent ranges must not overlap");
    assert!(!c.overlaps(&a));
    assert!(a.is_adjacent_to(&c));
    assert!(c.is_adjacent_to(&a));
}

#[test]
fn nested_ranges_overlap() {
    let outer = iv(0, 100);
    let inner = iv(10, 20);
    assert!(outer.overlaps(&inner));
    assert!(inner.overlaps(&outer));
    assert!(outer.contains_interval(&inner));
    assert!(!inner.contains_interval(&outer));
}

#[test]
fn contains_point_is_half_open() {
    let a = iv(10, 20);
    assert!(a.contains(10));
    assert!(a.contains(19));
    assert!(!a.contains(20));
    assert!(!a.contains(9));
}

#[test]
fn merge_spans_both_ranges() {
    assert_eq!(iv(0, 30).merge(&iv(20, 60)), iv(0, 60));
    assert_eq!(iv(20, 60).merge(&iv(0, 30)), iv(0, 60));
    assert_eq!(iv(0, 100).merge(&iv(10, 20)), iv(0, 100));
}

#[test]
fn intersection_of_disjoint_ranges_is_none() {
    assert_eq!(iv(0, 30).intersection(&iv(30, 60)), None);
    assert_eq!(iv(0, 30).intersection(&iv(20, 60)), Some(iv(20, 30)));
}

#[test]
fn clip_to_day_trims_overhang() {
    let day = iv(0, 100);
    assert_eq!(iv(90, 150).clip_to(&day), Some(iv(90, 100)));
    assert_eq!(iv(100, 150).clip_to(&day), None);
}

#[test]
fn ordering_is_by_start_then_end() {
    let mut intervals = vec![iv(60, 90), iv(0, 30), iv(0, 10), iv(30, 45)];
    intervals.sort();
    assert_eq!(intervals, vec![iv(0, 10), iv(0, 30), iv(30, 45), iv(60, 90)]);
}

#[test]
fn display_uses_half_open_notation() {
    assert_eq!(iv(60, 120).to_string(), "[60, 120)");
}

#[test]
fn deserialize_validates_and_converts_inclusive() {
    let parsed: Interval = serde_json::from_str(r#"{"start":0,"end":59,"inclusive":true}"#).unwrap();
    assert_eq!(parsed, iv(0, 60));

    let parsed: Interval = serde_json::from_str(r#"{"start":0,"end":60}"#).unwrap();
    assert_eq!(parsed, iv(0, 60));

    let err = serde_json::from_str::<Interval>(r#"{"start":60,"end":60}"#).unwrap_err();
    assert!(err.to_string().contains("start must be before end"));
}

#[test]
fn serialize_emits_start_and_end_only() {
    let json = serde_json::to_string(&iv(120, 1440)).unwrap();
    assert_eq!(json, r#"{"start":120,"end":1440}"#);
}
