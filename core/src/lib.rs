//! Synchronous client for the Eventbrite JSON APIs.
//!
//! # Overview
//! Maps three remote operations — event_search, event_get, venue_get — onto
//! typed request and result objects. Requests render themselves into query
//! strings; responses come back in a polymorphic JSON envelope that is
//! decoded structurally (error vs. event vs. venue vs. events, with
//! heterogeneous search-list elements) into one concrete result variant.
//!
//! # Design
//! - `EventbriteClient` holds credentials, the endpoint root, and a
//!   `Transport` capability; it carries no per-call state.
//! - HTTP is behind the `Transport` trait, so everything above it is
//!   deterministic and testable with canned responses. `UreqTransport` is
//!   the bundled blocking implementation.
//! - Loosely-typed wire fields (quoted numbers, "yes"/"no" booleans,
//!   comma-joined category tokens, IANA time-zone names) are normalized
//!   during decode; every mismatch is a hard error, never a default.

pub mod client;
pub mod decode;
pub mod error;
pub mod http;
pub mod model;
pub mod request;
mod wire;

pub use client::EventbriteClient;
pub use decode::{decode_result, ApiResult, EventResult, EventsResult, VenueResult};
pub use error::Error;
pub use http::{HttpResponse, Transport, UreqTransport};
pub use model::{
    Category, DateLabel, Event, EventData, EventSummary, RemoteError, SearchDate, TriState, Venue,
    WithinUnit,
};
pub use request::{
    Credentials, GetEventRequest, GetVenueRequest, SearchRequest, DEFAULT_BASE_URL,
};
