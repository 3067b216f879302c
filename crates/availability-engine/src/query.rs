//! Tier selection and the query entry point.
//!
//! A query computes free gaps twice: once for the mandatory attendees alone and
//! once for mandatory and optional attendees together. The combined answer wins
//! whenever it is non-empty. Otherwise the optional attendees are dropped, as
//! long as there is someone mandatory to schedule for.
//!
//! Optional attendees are all-or-nothing: there is no mode that keeps some of
//! them and drops others.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::busy::merge_busy_intervals;
use crate::error::{EngineError, Result};
use crate::gaps::find_free_gaps;
use crate::interval::{Interval, WHOLE_DAY};
use crate::model::{Event, MeetingRequest};

/// How the optional-inclusive answer is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TierPolicy {
    /// Gaps over the busy intervals of mandatory and optional attendees together.
    #[default]
    AllOrNothing,
    /// Mandatory-only gaps intersected with optional-only gaps by a merge sweep.
    IntersectionSweep,
}

/// Which attendees the returned slots account for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendeeTier {
    /// Mandatory and optional attendees are all free.
    Everyone,
    /// Optional attendees were dropped; mandatory attendees are free.
    MandatoryOnly,
    /// The request named no attendees, so the whole day qualifies.
    Unconstrained,
    /// No tier can be honored; the slot list is empty.
    Unsatisfiable,
}

/// The answer to a query together with the tier it honors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub tier: AttendeeTier,
    /// Sorted by start, pairwise non-overlapping, each at least the requested duration.
    pub slots: Vec<Interval>,
}

impl Availability {
    fn unsatisfiable() -> Self {
        Self {
            tier: AttendeeTier::Unsatisfiable,
            slots: Vec::new(),
        }
    }
}

/// Answers meeting requests over a fixed day.
///
/// Holds only immutable configuration, so one solver can serve any number of
/// concurrent queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilitySolver {
    day: Interval,
    policy: TierPolicy,
}

impl Default for AvailabilitySolver {
    fn default() -> Self {
        Self::new(WHOLE_DAY, TierPolicy::default())
    }
}

impl AvailabilitySolver {
    pub fn new(day: Interval, policy: TierPolicy) -> Self {
        Self { day, policy }
    }

    /// Solver over `[0, minutes)`. A zero-length day is rejected.
    pub fn with_day_minutes(minutes: u32, policy: TierPolicy) -> Result<Self> {
        let day = Interval::new(0, minutes).map_err(|_| EngineError::InvalidDay { minutes })?;
        Ok(Self::new(day, policy))
    }

    pub fn day(&self) -> Interval {
        self.day
    }

    pub fn policy(&self) -> TierPolicy {
        self.policy
    }

    /// Merged busy intervals of `attendees` within this solver's day.
    pub fn busy_intervals(&self, events: &[Event], attendees: &BTreeSet<String>) -> Vec<Interval> {
        merge_busy_intervals(events, attendees, &self.day)
    }

    /// Compute the slots for `request` and report which tier they honor.
    pub fn solve(&self, events: &[Event], request: &MeetingRequest) -> Availability {
        let duration = request.duration_minutes;

        if duration > self.day.duration() {
            debug!(duration, day = %self.day, "requested duration exceeds the day");
            return Availability::unsatisfiable();
        }

        if request.has_no_attendees() {
            return Availability {
                tier: AttendeeTier::Unconstrained,
                slots: vec![self.day],
            };
        }

        let mandatory = &request.mandatory_attendees;
        let available_mandatory = self.free_gaps(events, mandatory, duration);
        let available_all = match self.policy {
            TierPolicy::AllOrNothing => self.free_gaps(events, &request.everyone(), duration),
            TierPolicy::IntersectionSweep => {
                let available_optional =
                    self.free_gaps(events, &request.optional_attendees, duration);
                intersect_gaps(&available_mandatory, &available_optional, duration)
            }
        };

        debug!(
            policy = ?self.policy,
            mandatory_slots = available_mandatory.len(),
            all_slots = available_all.len(),
            "computed availability per attendee tier"
        );

        if !available_all.is_empty() {
            Availability {
                tier: AttendeeTier::Everyone,
                slots: available_all,
            }
        } else if !mandatory.is_empty() {
            Availability {
                tier: AttendeeTier::MandatoryOnly,
                slots: available_mandatory,
            }
        } else {
            Availability::unsatisfiable()
        }
    }

    /// The slots in which `request` can be scheduled.
    pub fn query(&self, events: &[Event], request: &MeetingRequest) -> Vec<Interval> {
        self.solve(events, request).slots
    }

    /// The earliest slot in which `request` can be scheduled.
    pub fn find_first_available(
        &self,
        events: &[Event],
        request: &MeetingRequest,
    ) -> Option<Interval> {
        self.query(events, request).into_iter().next()
    }

    fn free_gaps(
        &self,
        events: &[Event],
        attendees: &BTreeSet<String>,
        duration: u32,
    ) -> Vec<Interval> {
        let busy = self.busy_intervals(events, attendees);
        find_free_gaps(&busy, &self.day, duration)
    }
}

/// Intersect two sorted, non-overlapping gap lists with a two-pointer sweep,
/// keeping intersections at least `duration_minutes` long.
fn intersect_gaps(a: &[Interval], b: &[Interval], duration_minutes: u32) -> Vec<Interval> {
    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if let Some(shared) = a[i].intersection(&b[j]) {
            if shared.duration() >= duration_minutes {
                out.push(shared);
            }
        }
        // Advance whichever gap finishes first.
        if a[i].end() < b[j].end() {
            i += 1;
        } else {
            j += 1;
        }
    }

    out
}

/// Slots for `request` over the whole day, using the all-or-nothing policy.
pub fn query(events: &[Event], request: &MeetingRequest) -> Vec<Interval> {
    AvailabilitySolver::default().query(events, request)
}

/// The earliest slot for `request` over the whole day.
///
/// Delegates to [`query`] and returns its first slot.
pub fn find_first_available(events: &[Event], request: &MeetingRequest) -> Option<Interval> {
    AvailabilitySolver::default().find_first_available(events, request)
}
