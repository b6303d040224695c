//! Typed request builders for the three API operations.
//!
//! # Design
//! Each request type accumulates optional parameters as plain fields and
//! renders a fully-qualified URI on demand. Unset parameters are omitted
//! from the query string, never sent empty. Building has no side effects;
//! a missing required parameter is a `Configuration` error raised before
//! any network call.

use crate::error::Error;
use crate::model::{Category, SearchDate, WithinUnit};

/// Default service endpoint root.
pub const DEFAULT_BASE_URL: &str = "https://www.eventbrite.com/json";

/// Application key attached to every outgoing request as `app_key`.
/// Created once, held for the client's lifetime.
#[derive(Debug, Clone)]
pub struct Credentials {
    app_key: String,
}

impl Credentials {
    pub fn new(app_key: impl Into<String>) -> Self {
        Self {
            app_key: app_key.into(),
        }
    }

    pub fn app_key(&self) -> &str {
        &self.app_key
    }
}

/// Accumulates query pairs, percent-encoding values. Keys are fixed wire
/// tokens and never need encoding.
struct QueryString {
    pairs: Vec<String>,
}

impl QueryString {
    fn new(credentials: &Credentials) -> Self {
        let mut query = Self { pairs: Vec::new() };
        query.push("app_key", credentials.app_key());
        query
    }

    fn push(&mut self, key: &str, value: &str) {
        self.pairs.push(format!("{key}={}", urlencoding::encode(value)));
    }

    fn finish(self) -> String {
        self.pairs.join("&")
    }
}

fn operation_uri(base_url: &str, operation: &str, query: QueryString) -> String {
    format!(
        "{}/{operation}?{}",
        base_url.trim_end_matches('/'),
        query.finish()
    )
}

/// Parameters for the event_search operation. All filters are optional.
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    /// Free-text city filter.
    pub city: Option<String>,
    /// Search radius around the city.
    pub within: Option<u32>,
    /// Unit for `within`.
    pub within_unit: Option<WithinUnit>,
    /// Date filter, label or explicit range.
    pub date: Option<SearchDate>,
    /// Category filter; serialized as one comma-joined `category` value.
    pub categories: Vec<Category>,
}

impl SearchRequest {
    pub fn uri(&self, credentials: &Credentials, base_url: &str) -> Result<String, Error> {
        let mut query = QueryString::new(credentials);

        if let Some(city) = &self.city {
            query.push("city", city);
        }
        if let Some(within) = self.within {
            query.push("within", &within.to_string());
        }
        if let Some(unit) = self.within_unit {
            query.push("within_unit", unit.wire_token());
        }
        if let Some(date) = self.date {
            query.push("date", &date.to_query_value());
        }
        if !self.categories.is_empty() {
            let joined = self
                .categories
                .iter()
                .map(|c| c.wire_token())
                .collect::<Vec<_>>()
                .join(",");
            query.push("category", &joined);
        }

        Ok(operation_uri(base_url, "event_search", query))
    }
}

/// Parameters for the event_get operation.
#[derive(Debug, Clone, Default)]
pub struct GetEventRequest {
    pub id: Option<u64>,
}

impl GetEventRequest {
    pub fn uri(&self, credentials: &Credentials, base_url: &str) -> Result<String, Error> {
        let id = self
            .id
            .ok_or_else(|| Error::Configuration("event_get requires an event id".to_string()))?;

        let mut query = QueryString::new(credentials);
        query.push("id", &id.to_string());

        Ok(operation_uri(base_url, "event_get", query))
    }
}

/// Parameters for the venue_get operation.
#[derive(Debug, Clone, Default)]
pub struct GetVenueRequest {
    pub id: Option<u64>,
}

impl GetVenueRequest {
    pub fn uri(&self, credentials: &Credentials, base_url: &str) -> Result<String, Error> {
        let id = self
            .id
            .ok_or_else(|| Error::Configuration("venue_get requires a venue id".to_string()))?;

        let mut query = QueryString::new(credentials);
        query.push("id", &id.to_string());

        Ok(operation_uri(base_url, "venue_get", query))
    }
}
