//! Busy-interval extraction and merging.
//!
//! An event makes its interval busy for a tier when it shares at least one
//! attendee with that tier. Busy intervals that overlap are folded into a
//! single span; intervals that merely touch (`a.end == b.start`) stay apart so
//! that the zero-length gap between them is still seen by gap derivation.

use std::collections::BTreeSet;

use tracing::trace;

use crate::interval::Interval;
use crate::model::Event;

/// Collect the busy intervals of `relevant` attendees within `day`.
///
/// Event intervals are clipped to `day`; events entirely outside it are
/// ignored. Returns pairwise non-overlapping intervals sorted by start.
pub fn merge_busy_intervals(
    events: &[Event],
    relevant: &BTreeSet<String>,
    day: &Interval,
) -> Vec<Interval> {
    if relevant.is_empty() {
        return Vec::new();
    }

    let candidates = events
        .iter()
        .filter(|event| event.involves_any(relevant))
        .filter_map(|event| event.interval.clip_to(day));

    merge_intervals(candidates)
}

/// Merge arbitrary intervals into a sorted, pairwise non-overlapping set.
///
/// Each candidate absorbs every accumulated interval it overlaps; a candidate
/// that bridges several of them collapses them all into one span. Merging an
/// already-merged set returns it unchanged.
pub fn merge_intervals<I>(candidates: I) -> Vec<Interval>
where
    I: IntoIterator<Item = Interval>,
{
    let mut merged = candidates.into_iter().fold(Vec::new(), absorb);
    merged.sort();
    merged
}

/// Fold step: returns a fresh accumulator with `candidate` merged in.
fn absorb(accumulated: Vec<Interval>, candidate: Interval) -> Vec<Interval> {
    let mut span = candidate;
    let mut next = Vec::with_capacity(accumulated.len() + 1);

    for existing in accumulated {
        if existing.overlaps(&candidate) {
            trace!(%candidate, %existing, "merging overlapping busy intervals");
            span = span.merge(&existing);
        } else {
            next.push(existing);
        }
    }

    next.push(span);
    next
}
