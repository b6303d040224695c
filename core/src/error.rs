//! Error types for the Eventbrite API client.
//!
//! # Design
//! `RequestError` gets a dedicated variant because callers frequently
//! distinguish "the service returned a well-formed business error" (not
//! found, bad distance, etc.) from local problems. `Configuration` failures
//! are detected before any network I/O; `Transport` and `Decode` cover the
//! two halves of the round-trip.

use std::fmt;

use crate::model::RemoteError;

/// Errors returned by `EventbriteClient` and the request builders.
#[derive(Debug)]
pub enum Error {
    /// The request object is missing or carries an invalid required
    /// parameter. Raised before any network call.
    Configuration(String),

    /// The HTTP round-trip failed, or the response carried no body at all.
    Transport(String),

    /// The response body could not be decoded into the expected envelope:
    /// malformed JSON, a missing required field, an unrecognized enum or
    /// time-zone token, or a success envelope of the wrong kind.
    Decode(String),

    /// The service returned a well-formed error envelope. Carries the remote
    /// error type and message verbatim.
    RequestError(RemoteError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Configuration(msg) => write!(f, "invalid request: {msg}"),
            Error::Transport(msg) => write!(f, "transport failed: {msg}"),
            Error::Decode(msg) => write!(f, "decode failed: {msg}"),
            Error::RequestError(error) => write!(f, "request error: {error}"),
        }
    }
}

impl std::error::Error for Error {}
