//! Query inputs: scheduled events, meeting requests, and the JSON document
//! that bundles them for the CLI and WASM front ends.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::interval::Interval;

/// An event already on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// When the event takes place.
    pub interval: Interval,
    /// Everyone committed to the event. An empty set blocks nobody.
    #[serde(default)]
    pub attendees: BTreeSet<String>,
}

impl Event {
    pub fn new<I, S>(interval: Interval, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            interval,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    /// True iff at least one attendee of this event is in `relevant`.
    pub fn involves_any(&self, relevant: &BTreeSet<String>) -> bool {
        self.attendees.iter().any(|a| relevant.contains(a))
    }
}

/// A meeting to be placed somewhere in the day.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MeetingRequest {
    /// Attendees who must be free for the whole meeting.
    #[serde(default, alias = "attendees")]
    pub mandatory_attendees: BTreeSet<String>,
    /// Attendees to include only if everyone can make it.
    #[serde(default)]
    pub optional_attendees: BTreeSet<String>,
    /// Required length of the meeting in minutes.
    pub duration_minutes: u32,
}

impl MeetingRequest {
    pub fn new<M, O, S, T>(mandatory: M, optional: O, duration_minutes: u32) -> Self
    where
        M: IntoIterator<Item = S>,
        O: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            mandatory_attendees: mandatory.into_iter().map(Into::into).collect(),
            optional_attendees: optional.into_iter().map(Into::into).collect(),
            duration_minutes,
        }
    }

    /// True iff the request names no attendees at all.
    pub fn has_no_attendees(&self) -> bool {
        self.mandatory_attendees.is_empty() && self.optional_attendees.is_empty()
    }

    /// Mandatory and optional attendees together.
    pub fn everyone(&self) -> BTreeSet<String> {
        self.mandatory_attendees
            .union(&self.optional_attendees)
            .cloned()
            .collect()
    }
}

/// A complete query as exchanged over JSON: the day's events and the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDocument {
    #[serde(default)]
    pub events: Vec<Event>,
    pub request: MeetingRequest,
}

impl QueryDocument {
    /// Parse a query document. Interval validation errors surface here.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| EngineError::Document(e.to_string()))
    }
}
