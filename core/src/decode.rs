//! Polymorphic decoder for the response envelopes.
//!
//! # Design
//! The service wraps every response in a top-level JSON object whose single
//! key identifies the payload: `error`, `event`, `venue`, or `events`. There
//! is no explicit type tag, so decoding is structural — parse into a generic
//! `serde_json::Value` first, dispatch on which key is present, then run the
//! typed deserialization for that variant. Search lists are heterogeneous
//! and dispatch the same way per element. Any mismatch is a hard `Decode`
//! error; nothing is silently defaulted.

use serde_json::Value;

use crate::error::Error;
use crate::model::{Event, EventData, RemoteError, Venue};

/// Result of the event_get operation.
#[derive(Debug, Clone)]
pub struct EventResult {
    pub event: Event,
}

/// Result of the venue_get operation.
#[derive(Debug, Clone)]
pub struct VenueResult {
    pub venue: Venue,
}

/// Result of the event_search operation. `events` preserves wire order; by
/// API contract the aggregate summary is typically element 0, but the
/// decoder dispatches on shape, never position.
#[derive(Debug, Clone)]
pub struct EventsResult {
    pub events: Vec<EventData>,
}

/// The decoded response envelope. Exactly one variant per response, chosen
/// by which top-level key the JSON object carries.
#[derive(Debug, Clone)]
pub enum ApiResult {
    Error(RemoteError),
    Event(EventResult),
    Venue(VenueResult),
    Events(EventsResult),
}

impl ApiResult {
    /// The envelope key this variant was decoded from.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiResult::Error(_) => "error",
            ApiResult::Event(_) => "event",
            ApiResult::Venue(_) => "venue",
            ApiResult::Events(_) => "events",
        }
    }
}

fn decode_error(err: serde_json::Error) -> Error {
    Error::Decode(err.to_string())
}

/// Decode one response body into its envelope variant.
///
/// The `error` key wins over everything else: once an error envelope is
/// recognized no typed success decoding is attempted.
pub fn decode_result(body: &str) -> Result<ApiResult, Error> {
    let value: Value = serde_json::from_str(body).map_err(decode_error)?;
    let object = value
        .as_object()
        .ok_or_else(|| Error::Decode("response is not a JSON object".to_string()))?;

    if let Some(raw) = object.get("error") {
        let error: RemoteError = serde_json::from_value(raw.clone()).map_err(decode_error)?;
        return Ok(ApiResult::Error(error));
    }

    if let Some(raw) = object.get("event") {
        let event: Event = serde_json::from_value(raw.clone()).map_err(decode_error)?;
        return Ok(ApiResult::Event(EventResult { event }));
    }

    if let Some(raw) = object.get("venue") {
        let venue: Venue = serde_json::from_value(raw.clone()).map_err(decode_error)?;
        return Ok(ApiResult::Venue(VenueResult { venue }));
    }

    if let Some(raw) = object.get("events") {
        let elements = raw
            .as_array()
            .ok_or_else(|| Error::Decode("\"events\" is not an array".to_string()))?;
        let events = elements
            .iter()
            .map(decode_event_data)
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(ApiResult::Events(EventsResult { events }));
    }

    Err(Error::Decode(
        "response object carries no recognized envelope key".to_string(),
    ))
}

/// Decode one search-list element by shape: an `event` sub-object makes it a
/// full record, a `summary` sub-object makes it the aggregate-count record.
fn decode_event_data(raw: &Value) -> Result<EventData, Error> {
    let object = raw
        .as_object()
        .ok_or_else(|| Error::Decode("search result element is not a JSON object".to_string()))?;

    if let Some(event) = object.get("event") {
        let event: Event = serde_json::from_value(event.clone()).map_err(decode_error)?;
        return Ok(EventData::Full(Box::new(event)));
    }

    if let Some(summary) = object.get("summary") {
        let summary = serde_json::from_value(summary.clone()).map_err(decode_error)?;
        return Ok(EventData::Summary(summary));
    }

    Err(Error::Decode(
        "search result element is neither an event nor a summary".to_string(),
    ))
}
