//! HTTP transport boundary for the client.
//!
//! # Design
//! The core never talks to the network directly. It consumes a `Transport`
//! capability — "perform a GET against this URI, give back status, headers
//! and an optional body" — and everything above that line is deterministic
//! and testable with canned responses. `UreqTransport` is the bundled
//! implementation; tests inject their own.
//!
//! All response fields use owned types so a `Transport` implementation can
//! fully consume and release its connection resources before returning.

use crate::error::Error;

/// An HTTP response described as plain data.
///
/// `body` is `None` when the response carried no body at all; the client
/// façade treats that as a transport failure.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Capability to execute a single blocking GET request.
///
/// One call, one attempt: implementations must not retry, and must release
/// any connection resources on every exit path before returning. Thread
/// safety of concurrent calls is the implementation's contract; the client
/// façade itself holds no per-call state.
pub trait Transport {
    fn get(&self, uri: &str) -> Result<HttpResponse, Error>;
}

/// `Transport` implementation backed by a blocking `ureq` agent.
///
/// Status-code-as-error behavior is disabled so non-2xx responses come back
/// as data; the service reports business errors in the JSON body regardless
/// of status, and the decoder is the authority on what the payload means.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();

        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn get(&self, uri: &str) -> Result<HttpResponse, Error> {
        let mut response = self
            .agent
            .get(uri)
            .call()
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();

        // Reading the body to completion is what lets ureq return the
        // connection to its pool; the response is dropped on every path.
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| Error::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body: if body.is_empty() { None } else { Some(body) },
        })
    }
}
