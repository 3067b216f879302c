//! Half-open minute ranges within a day.
//!
//! An [`Interval`] covers `[start, end)`: it includes `start` and excludes
//! `end`. The constructor rejects empty and inverted ranges, so every value in
//! circulation satisfies `start < end`. Inclusive external boundaries are
//! converted once, through [`Interval::from_start_end`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Number of minutes in the day the engine schedules over.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// The whole day, `[0, MINUTES_PER_DAY)`.
pub const WHOLE_DAY: Interval = Interval {
    start: 0,
    end: MINUTES_PER_DAY,
};

/// A non-empty half-open range of minutes.
///
/// Ordering is by `start`, then by `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "IntervalRepr")]
pub struct Interval {
    start: u32,
    end: u32,
}

/// Wire form accepted on deserialization. `inclusive` defaults to `false`.
#[derive(Deserialize)]
struct IntervalRepr {
    start: u32,
    end: u32,
    #[serde(default)]
    inclusive: bool,
}

impl TryFrom<IntervalRepr> for Interval {
    type Error = EngineError;

    fn try_from(repr: IntervalRepr) -> Result<Self> {
        Interval::from_start_end(repr.start, repr.end, repr.inclusive)
    }
}

impl Interval {
    /// The whole day, `[0, MINUTES_PER_DAY)`.
    pub const WHOLE_DAY: Interval = WHOLE_DAY;

    /// Build `[start, end)`. Fails unless `start < end`.
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(EngineError::InvalidInterval { start, end })
        }
    }

    /// Build an interval from external boundaries.
    ///
    /// With `inclusive = true` the `end` minute itself is part of the range, so
    /// the half-open bound becomes `end + 1`.
    pub fn from_start_end(start: u32, end: u32, inclusive: bool) -> Result<Self> {
        let end = if inclusive {
            end.checked_add(1)
                .ok_or(EngineError::BoundaryOverflow { end })?
        } else {
            end
        };
        Self::new(start, end)
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Length in minutes, `end - start`. Always positive.
    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    /// True iff the two ranges share at least one minute.
    ///
    /// Adjacent ranges (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True iff `point` lies in `[start, end)`.
    pub fn contains(&self, point: u32) -> bool {
        self.start <= point && point < self.end
    }

    /// True iff `other` lies entirely within `self`.
    pub fn contains_interval(&self, other: &Interval) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// True iff one range ends exactly where the other starts.
    pub fn is_adjacent_to(&self, other: &Interval) -> bool {
        self.end == other.start || other.end == self.start
    }

    /// Smallest interval spanning both, `[min(starts), max(ends))`.
    pub fn merge(&self, other: &Interval) -> Interval {
        Interval {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// The shared part of two ranges, if any.
    pub fn intersection(&self, other: &Interval) -> Option<Interval> {
        Interval::new(self.start.max(other.start), self.end.min(other.end)).ok()
    }

    /// Restrict `self` to `bounds`. `None` when nothing remains.
    pub fn clip_to(&self, bounds: &Interval) -> Option<Interval> {
        self.intersection(bounds)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
