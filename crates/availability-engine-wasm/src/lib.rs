//! WASM bindings for availability-engine.
//!
//! Exposes availability queries and busy-interval merging to JavaScript via
//! `wasm-bindgen`. All complex types are passed as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p availability-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/availability-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/availability_engine_wasm.wasm
//! ```

use std::collections::BTreeSet;

use availability_engine::{AvailabilitySolver, Event, MeetingRequest, TierPolicy, MINUTES_PER_DAY};
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers: JSON in, JSON out, string errors
// ---------------------------------------------------------------------------

fn parse_json<T: DeserializeOwned>(json: &str, what: &str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid {} JSON: {}", what, e))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

/// Parse a policy name; `None` selects the default policy.
fn parse_policy(policy: Option<&str>) -> Result<TierPolicy, String> {
    match policy {
        None | Some("all-or-nothing") => Ok(TierPolicy::AllOrNothing),
        Some("intersection-sweep") => Ok(TierPolicy::IntersectionSweep),
        Some(other) => Err(format!(
            "Unknown policy: '{}'. Available policies: all-or-nothing, intersection-sweep",
            other
        )),
    }
}

fn solver(day_minutes: Option<u32>, policy: TierPolicy) -> Result<AvailabilitySolver, String> {
    AvailabilitySolver::with_day_minutes(day_minutes.unwrap_or(MINUTES_PER_DAY), policy)
        .map_err(|e| e.to_string())
}

fn query_availability_impl(
    events_json: &str,
    request_json: &str,
    policy: Option<&str>,
    day_minutes: Option<u32>,
) -> Result<String, String> {
    let events: Vec<Event> = parse_json(events_json, "events")?;
    let request: MeetingRequest = parse_json(request_json, "request")?;
    let solver = solver(day_minutes, parse_policy(policy)?)?;

    to_json(&solver.solve(&events, &request))
}

fn merge_busy_impl(
    events_json: &str,
    attendees_json: &str,
    day_minutes: Option<u32>,
) -> Result<String, String> {
    let events: Vec<Event> = parse_json(events_json, "events")?;
    let attendees: BTreeSet<String> = parse_json(attendees_json, "attendees")?;
    let solver = solver(day_minutes, TierPolicy::default())?;

    to_json(&solver.busy_intervals(&events, &attendees))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Find the slots in which a meeting can be scheduled.
///
/// # Arguments
/// - `events_json` -- JSON array of `{interval: {start, end, inclusive?}, attendees: [..]}`
/// - `request_json` -- `{mandatory_attendees, optional_attendees, duration_minutes}`
/// - `policy` -- Optional `"all-or-nothing"` (default) or `"intersection-sweep"`
/// - `day_minutes` -- Optional day length (default 1440)
///
/// Returns a JSON string `{tier, slots: [{start, end}]}`.
#[wasm_bindgen(js_name = "queryAvailability")]
pub fn query_availability(
    events_json: &str,
    request_json: &str,
    policy: Option<String>,
    day_minutes: Option<u32>,
) -> Result<String, JsValue> {
    query_availability_impl(events_json, request_json, policy.as_deref(), day_minutes)
        .map_err(|e| JsValue::from_str(&e))
}

/// Merge the busy intervals of a set of attendees.
///
/// `attendees_json` is a JSON array of attendee names. Returns a JSON string
/// containing a sorted array of `{start, end}` objects.
#[wasm_bindgen(js_name = "mergeBusy")]
pub fn merge_busy(
    events_json: &str,
    attendees_json: &str,
    day_minutes: Option<u32>,
) -> Result<String, JsValue> {
    merge_busy_impl(events_json, attendees_json, day_minutes).map_err(|e| JsValue::from_str(&e))
}
