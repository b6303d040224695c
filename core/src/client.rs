//! Client façade for the three API operations.
//!
//! # Design
//! `EventbriteClient` owns the credentials, the endpoint root, and a boxed
//! `Transport`. Every operation is one blocking call with no retries and no
//! caching: build the URI, execute the GET, decode the body, map an error
//! envelope to `Error::RequestError`. The client holds no per-call mutable
//! state, so reuse across sequential calls is always safe; safety under
//! concurrent calls is whatever the injected transport guarantees.

use tracing::debug;

use crate::decode::{decode_result, ApiResult, EventResult, EventsResult, VenueResult};
use crate::error::Error;
use crate::http::{Transport, UreqTransport};
use crate::request::{
    Credentials, GetEventRequest, GetVenueRequest, SearchRequest, DEFAULT_BASE_URL,
};

/// A client for the Eventbrite JSON APIs.
pub struct EventbriteClient {
    credentials: Credentials,
    base_url: String,
    transport: Box<dyn Transport>,
}

impl EventbriteClient {
    /// Client against the production endpoint with the bundled ureq
    /// transport.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_transport(credentials, DEFAULT_BASE_URL, Box::new(UreqTransport::new()))
    }

    /// Client with an injected transport and endpoint root. This is how
    /// tests replay canned responses, and how callers supply their own
    /// connection policy.
    pub fn with_transport(
        credentials: Credentials,
        base_url: &str,
        transport: Box<dyn Transport>,
    ) -> Self {
        Self {
            credentials,
            base_url: base_url.to_string(),
            transport,
        }
    }

    /// Searches for events using the event_search operation.
    pub fn search(&self, request: &SearchRequest) -> Result<EventsResult, Error> {
        let uri = request.uri(&self.credentials, &self.base_url)?;
        match self.send(&uri)? {
            ApiResult::Events(result) => Ok(result),
            other => Err(envelope_mismatch("events", &other)),
        }
    }

    /// Fetches a single event using the event_get operation.
    pub fn get_event(&self, request: &GetEventRequest) -> Result<EventResult, Error> {
        let uri = request.uri(&self.credentials, &self.base_url)?;
        match self.send(&uri)? {
            ApiResult::Event(result) => Ok(result),
            other => Err(envelope_mismatch("event", &other)),
        }
    }

    /// Fetches a single venue using the venue_get operation.
    pub fn get_venue(&self, request: &GetVenueRequest) -> Result<VenueResult, Error> {
        let uri = request.uri(&self.credentials, &self.base_url)?;
        match self.send(&uri)? {
            ApiResult::Venue(result) => Ok(result),
            other => Err(envelope_mismatch("venue", &other)),
        }
    }

    /// One request, one attempt: GET the URI, require a body, decode it, and
    /// turn a decoded error envelope into a failure.
    fn send(&self, uri: &str) -> Result<ApiResult, Error> {
        debug!(%uri, "GET");

        let response = self.transport.get(uri)?;

        debug!(status = response.status, "response received");
        for (name, value) in &response.headers {
            debug!(header = %name, value = %value, "response header");
        }

        let body = response
            .body
            .ok_or_else(|| Error::Transport("no body present in response".to_string()))?;

        match decode_result(&body)? {
            ApiResult::Error(error) => Err(Error::RequestError(error)),
            result => Ok(result),
        }
    }
}

/// The service answered with a well-formed success envelope of the wrong
/// kind for the operation.
fn envelope_mismatch(expected: &str, got: &ApiResult) -> Error {
    Error::Decode(format!(
        "expected {expected:?} envelope, got {:?}",
        got.kind()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpResponse;

    /// Transport that replays one canned body for every request.
    struct CannedTransport {
        body: Option<String>,
    }

    impl CannedTransport {
        fn json(body: &str) -> Box<dyn Transport> {
            Box::new(Self {
                body: Some(body.to_string()),
            })
        }

        fn empty() -> Box<dyn Transport> {
            Box::new(Self { body: None })
        }
    }

    impl Transport for CannedTransport {
        fn get(&self, _uri: &str) -> Result<HttpResponse, Error> {
            Ok(HttpResponse {
                status: 200,
                headers: vec![("content-type".to_string(), "application/json".to_string())],
                body: self.body.clone(),
            })
        }
    }

    fn client(transport: Box<dyn Transport>) -> EventbriteClient {
        EventbriteClient::with_transport(
            Credentials::new("TESTKEY"),
            "http://localhost:3000",
            transport,
        )
    }

    #[test]
    fn error_envelope_surfaces_as_request_error() {
        let client = client(CannedTransport::json(
            r#"{"error":{"error_type":"Not Found","error_message":"No records were found with the given parameters."}}"#,
        ));
        let request = GetEventRequest { id: Some(1) };
        let err = client.get_event(&request).unwrap_err();
        match err {
            Error::RequestError(error) => assert_eq!(error.error_type, "Not Found"),
            other => panic!("expected RequestError, got {other}"),
        }
    }

    #[test]
    fn wrong_success_envelope_is_a_decode_error() {
        let client = client(CannedTransport::json(
            r#"{"venue":{"id":1,"latitude":1.0,"longitude":2.0}}"#,
        ));
        let request = GetEventRequest { id: Some(1) };
        let err = client.get_event(&request).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn missing_body_is_a_transport_error() {
        let client = client(CannedTransport::empty());
        let request = GetVenueRequest { id: Some(1) };
        let err = client.get_venue(&request).unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }

    #[test]
    fn configuration_error_is_raised_before_any_transport_call() {
        struct PanicTransport;
        impl Transport for PanicTransport {
            fn get(&self, _uri: &str) -> Result<HttpResponse, Error> {
                panic!("transport must not be invoked for an invalid request");
            }
        }

        let client = client(Box::new(PanicTransport));
        let err = client.get_event(&GetEventRequest::default()).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn search_returns_typed_events_result() {
        let client = client(CannedTransport::json(
            r#"{"events":[
                {"summary":{"total_items":1,"first_event":7,"last_event":7,"num_showing":1}},
                {"event":{"id":7,"title":"Solo","url":"http://example.com/7"}}
            ]}"#,
        ));
        let result = client.search(&SearchRequest::default()).unwrap();
        assert_eq!(result.events.len(), 2);
        assert!(result.events[0].as_summary().is_some());
        assert_eq!(result.events[1].as_event().unwrap().title, "Solo");
    }
}
