//! Exercise the full client against canned response bodies from
//! `test-vectors/`, replayed through an injected transport. These are the
//! recorded responses of the real service, so the assertions pin the exact
//! values the decoder must produce.

use eventbrite_core::{
    Category, Credentials, DateLabel, Error, EventbriteClient, GetEventRequest, GetVenueRequest,
    HttpResponse, SearchDate, SearchRequest, Transport, TriState, WithinUnit,
};

/// Transport that replays one canned JSON body for every request.
struct FixtureTransport {
    body: &'static str,
}

impl Transport for FixtureTransport {
    fn get(&self, _uri: &str) -> Result<HttpResponse, Error> {
        Ok(HttpResponse {
            status: 200,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(self.body.to_string()),
        })
    }
}

fn client(fixture: &'static str) -> EventbriteClient {
    EventbriteClient::with_transport(
        Credentials::new("EHHWMU473LTVEO4JFY"),
        "http://localhost:3000",
        Box::new(FixtureTransport { body: fixture }),
    )
}

#[test]
fn get_event_surfaces_not_found_error() {
    let client = client(include_str!("../../test-vectors/Get-Error.json"));
    let request = GetEventRequest { id: Some(1) };

    let err = client.get_event(&request).unwrap_err();
    match err {
        Error::RequestError(error) => {
            assert_eq!(error.error_type, "Not Found");
            assert_eq!(
                error.error_message,
                "No records were found with the given parameters."
            );
        }
        other => panic!("expected RequestError, got {other}"),
    }
}

#[test]
fn get_event_decodes_full_record() {
    let client = client(include_str!("../../test-vectors/Get-Ok.json"));
    let request = GetEventRequest {
        id: Some(5396196168),
    };

    let result = client.get_event(&request).unwrap();
    let event = result.event;

    assert_eq!(event.id, 5396196168);
    assert_eq!(
        event.title,
        "China, India, & U.S. Life Science Markets Symposium"
    );
    assert_eq!(
        event.url,
        "http://chinaindiauslifesciencemarkets.eventbrite.com"
    );
    assert_eq!(event.repeats, TriState::False);
    assert_eq!(event.repeats.as_bool(), Some(false));

    assert_eq!(event.categories.len(), 2);
    assert!(event.categories.contains(&Category::Conferences));
    assert!(event.categories.contains(&Category::Sales));

    assert_eq!(event.timezone, Some(chrono_tz::America::Los_Angeles));

    let venue = event.venue.expect("event venue");
    assert_eq!(venue.latitude, 37.77493);
    assert_eq!(venue.longitude, -122.419416);
}

#[test]
fn get_venue_decodes_standalone_record() {
    let client = client(include_str!("../../test-vectors/Venue-Ok.json"));
    let request = GetVenueRequest { id: Some(172121) };

    let result = client.get_venue(&request).unwrap();
    let venue = result.venue;

    assert_eq!(venue.id, Some(172121));
    assert_eq!(venue.name.as_deref(), Some("Mission Bay Conference Center"));
    assert_eq!(venue.city.as_deref(), Some("San Francisco"));
    assert_eq!(venue.latitude, 37.77493);
    assert_eq!(venue.longitude, -122.419416);
}

#[test]
fn search_surfaces_distance_error() {
    let client = client(include_str!("../../test-vectors/Search-Error.json"));
    let request = SearchRequest::default();

    let err = client.search(&request).unwrap_err();
    match err {
        Error::RequestError(error) => {
            assert_eq!(error.error_type, "Distance error");
            assert_eq!(error.error_message, "Distance (integer) is invalid [ 10.0 ]");
        }
        other => panic!("expected RequestError, got {other}"),
    }
}

#[test]
fn search_decodes_summary_and_ten_events() {
    let client = client(include_str!("../../test-vectors/SearchResult-10.json"));
    let request = SearchRequest {
        city: Some("San Francisco".to_string()),
        within: Some(10),
        within_unit: Some(WithinUnit::Miles),
        date: Some(SearchDate::Label(DateLabel::Today)),
        categories: vec![
            Category::Conferences,
            Category::Conventions,
            Category::Entertainment,
            Category::Fairs,
            Category::Food,
            Category::Music,
            Category::Performances,
            Category::Recreation,
            Category::Sales,
            Category::Seminars,
            Category::Sports,
            Category::Social,
            Category::Tradeshows,
            Category::Travel,
        ],
    };

    let result = client.search(&request).unwrap();
    let events = result.events;

    // 10 events + 1 summary.
    assert_eq!(events.len(), 11);

    let summary = events[0].as_summary().expect("element 0 is the summary");
    assert_eq!(summary.total_items, 1922);
    assert_eq!(summary.first_event, 5620119930);
    assert_eq!(summary.last_event, 6113316093);
    assert_eq!(summary.num_showing, 10);

    let full: Vec<_> = events[1..]
        .iter()
        .map(|e| e.as_event().expect("full event record"))
        .collect();
    assert_eq!(full.len(), 10);
    assert_eq!(full[0].id, 5620119930);
    assert_eq!(full[9].id, 6113316093);
    assert_eq!(full[0].title, "Startup Founders Breakfast");
    assert_eq!(full[1].repeats, TriState::True);
}
