//! # availability-engine
//!
//! Deterministic meeting-availability queries for a single day.
//!
//! Given the events already on the calendar and a meeting request, the engine
//! computes every window of the day in which the meeting fits. Optional
//! attendees are honored only when a window exists that suits all of them;
//! otherwise the answer falls back to the mandatory attendees alone.
//!
//! ## Quick start
//!
//! ```rust
//! use availability_engine::{query, Event, Interval, MeetingRequest};
//!
//! let events = vec![Event::new(Interval::new(60, 120).unwrap(), ["A"])];
//! let request = MeetingRequest::new(["A"], Vec::<&str>::new(), 30);
//!
//! let slots = query(&events, &request);
//! assert_eq!(
//!     slots,
//!     vec![Interval::new(0, 60).unwrap(), Interval::new(120, 1440).unwrap()]
//! );
//! ```
//!
//! ## Modules
//!
//! - [`interval`] — Half-open minute ranges and the `WHOLE_DAY` constant
//! - [`model`] — Events, meeting requests, and the JSON query document
//! - [`busy`] — Busy-interval extraction and merging per attendee tier
//! - [`gaps`] — Free-gap derivation between busy intervals
//! - [`query`] — Tier-selection policy and the `query` entry point
//! - [`error`] — Error types

pub mod busy;
pub mod error;
pub mod gaps;
pub mod interval;
pub mod model;
pub mod query;

pub use busy::merge_busy_intervals;
pub use error::EngineError;
pub use gaps::find_free_gaps;
pub use interval::{Interval, MINUTES_PER_DAY, WHOLE_DAY};
pub use model::{Event, MeetingRequest, QueryDocument};
pub use query::{
    find_first_available, query, AttendeeTier, Availability, AvailabilitySolver, TierPolicy,
};
