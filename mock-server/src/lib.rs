//! Mock Eventbrite endpoint for integration tests.
//!
//! Serves a configured canned JSON body per operation name (`event_search`,
//! `event_get`, `venue_get`) so client tests can exercise the full HTTP
//! path against recorded responses. Like the real service, every reply is
//! `200 OK` — business failures live in the JSON error envelope, not in the
//! status code.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};
use tokio::net::TcpListener;

/// Canned JSON body per operation name.
pub type Fixtures = Arc<HashMap<String, String>>;

const UNKNOWN_OPERATION: &str =
    r#"{"error":{"error_type":"Not Found","error_message":"Unknown operation."}}"#;

pub fn app(fixtures: HashMap<String, String>) -> Router {
    let fixtures: Fixtures = Arc::new(fixtures);
    Router::new()
        .route("/{operation}", get(serve))
        .with_state(fixtures)
}

pub async fn run(
    listener: TcpListener,
    fixtures: HashMap<String, String>,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app(fixtures)).await
}

/// The recorded responses bundled in `test-vectors/`, keyed by operation.
pub fn bundled_fixtures() -> HashMap<String, String> {
    HashMap::from([
        (
            "event_search".to_string(),
            include_str!("../../test-vectors/SearchResult-10.json").to_string(),
        ),
        (
            "event_get".to_string(),
            include_str!("../../test-vectors/Get-Ok.json").to_string(),
        ),
        (
            "venue_get".to_string(),
            include_str!("../../test-vectors/Venue-Ok.json").to_string(),
        ),
    ])
}

async fn serve(
    Path(operation): Path<String>,
    State(fixtures): State<Fixtures>,
) -> impl IntoResponse {
    let body = fixtures
        .get(&operation)
        .cloned()
        .unwrap_or_else(|| UNKNOWN_OPERATION.to_string());

    ([(header::CONTENT_TYPE, "application/json")], body)
}
