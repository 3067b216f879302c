//! Free-gap derivation.
//!
//! Walks the busy intervals in start order with a cursor, emitting the gap in
//! front of each busy interval and the trailing gap up to the end of the day.
//! Only gaps at least `duration_minutes` long are kept.

use crate::interval::Interval;

/// Find the free gaps of `day` not covered by `busy`.
///
/// `busy` need not be sorted. With no busy intervals the whole day is free.
/// Zero-length gaps (between adjacent busy intervals) are never returned.
pub fn find_free_gaps(busy: &[Interval], day: &Interval, duration_minutes: u32) -> Vec<Interval> {
    let mut sorted: Vec<Interval> = busy.iter().filter_map(|b| b.clip_to(day)).collect();

    if sorted.is_empty() {
        return vec![*day];
    }

    sorted.sort();

    let mut gaps = Vec::new();
    let mut cursor = day.start();

    for interval in &sorted {
        push_if_long_enough(&mut gaps, cursor, interval.start(), duration_minutes);
        cursor = cursor.max(interval.end());
    }

    // Trailing gap after the last busy interval.
    push_if_long_enough(&mut gaps, cursor, day.end(), duration_minutes);

    gaps
}

fn push_if_long_enough(gaps: &mut Vec<Interval>, start: u32, end: u32, duration_minutes: u32) {
    if let Ok(gap) = Interval::new(start, end) {
        if gap.duration() >= duration_minutes {
            gaps.push(gap);
        }
    }
}
