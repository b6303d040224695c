//! Domain model for the Eventbrite JSON API.
//!
//! # Design
//! These types are the decode targets for the response envelopes. They own
//! their data outright — each call produces an independent object graph with
//! no caching or cross-call aliasing. Loosely-typed wire fields go through
//! the adapters in `wire`; everything else is plain serde derive.

use std::fmt;

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::Deserialize;

/// A business-level error returned by the service inside an `error`
/// envelope. `error_type` is a short category ("Not Found", "Distance
/// error"); `error_message` is human-readable. Both are carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteError {
    pub error_type: String,
    pub error_message: String,
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_type, self.error_message)
    }
}

/// A boolean the wire format cannot guarantee: the `repeats` field may be
/// "yes", "no", a JSON boolean, or absent. Absent maps to `Unknown` rather
/// than being forced to a binary value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriState {
    True,
    False,
    #[default]
    Unknown,
}

impl TriState {
    /// `None` for `Unknown`.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            TriState::True => Some(true),
            TriState::False => Some(false),
            TriState::Unknown => None,
        }
    }
}

/// Closed event-category vocabulary. Wire tokens are lower-case; matching is
/// case-insensitive and total — an unknown token is a decode error, never a
/// silently dropped entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Conferences,
    Conventions,
    Entertainment,
    Fairs,
    Food,
    Fundraisers,
    Music,
    Organizations,
    Other,
    Performances,
    Recreation,
    Religion,
    Reunions,
    Sales,
    Seminars,
    Social,
    Sports,
    Tradeshows,
    Travel,
}

impl Category {
    pub const ALL: [Category; 19] = [
        Category::Conferences,
        Category::Conventions,
        Category::Entertainment,
        Category::Fairs,
        Category::Food,
        Category::Fundraisers,
        Category::Music,
        Category::Organizations,
        Category::Other,
        Category::Performances,
        Category::Recreation,
        Category::Religion,
        Category::Reunions,
        Category::Sales,
        Category::Seminars,
        Category::Social,
        Category::Sports,
        Category::Tradeshows,
        Category::Travel,
    ];

    /// The lower-case token this category uses on the wire, in both query
    /// strings and response bodies.
    pub fn wire_token(self) -> &'static str {
        match self {
            Category::Conferences => "conferences",
            Category::Conventions => "conventions",
            Category::Entertainment => "entertainment",
            Category::Fairs => "fairs",
            Category::Food => "food",
            Category::Fundraisers => "fundraisers",
            Category::Music => "music",
            Category::Organizations => "organizations",
            Category::Other => "other",
            Category::Performances => "performances",
            Category::Recreation => "recreation",
            Category::Religion => "religion",
            Category::Reunions => "reunions",
            Category::Sales => "sales",
            Category::Seminars => "seminars",
            Category::Social => "social",
            Category::Sports => "sports",
            Category::Tradeshows => "tradeshows",
            Category::Travel => "travel",
        }
    }

    /// Case-insensitive token lookup. `None` means the token is not part of
    /// the vocabulary.
    pub fn from_wire(token: &str) -> Option<Category> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.wire_token().eq_ignore_ascii_case(token))
    }
}

/// Distance unit for the `within` search filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithinUnit {
    Miles,
    Kilometers,
}

impl WithinUnit {
    pub fn wire_token(self) -> &'static str {
        match self {
            WithinUnit::Miles => "miles",
            WithinUnit::Kilometers => "kilometers",
        }
    }

    pub fn from_wire(token: &str) -> Option<WithinUnit> {
        [WithinUnit::Miles, WithinUnit::Kilometers]
            .iter()
            .copied()
            .find(|u| u.wire_token().eq_ignore_ascii_case(token))
    }
}

/// Symbolic date filters understood by the search operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLabel {
    All,
    Future,
    Past,
    Today,
    Tomorrow,
    ThisWeek,
    ThisWeekend,
    NextWeek,
    ThisMonth,
    NextMonth,
}

impl DateLabel {
    pub const ALL: [DateLabel; 10] = [
        DateLabel::All,
        DateLabel::Future,
        DateLabel::Past,
        DateLabel::Today,
        DateLabel::Tomorrow,
        DateLabel::ThisWeek,
        DateLabel::ThisWeekend,
        DateLabel::NextWeek,
        DateLabel::ThisMonth,
        DateLabel::NextMonth,
    ];

    pub fn wire_token(self) -> &'static str {
        match self {
            DateLabel::All => "all",
            DateLabel::Future => "future",
            DateLabel::Past => "past",
            DateLabel::Today => "today",
            DateLabel::Tomorrow => "tomorrow",
            DateLabel::ThisWeek => "this_week",
            DateLabel::ThisWeekend => "this_weekend",
            DateLabel::NextWeek => "next_week",
            DateLabel::ThisMonth => "this_month",
            DateLabel::NextMonth => "next_month",
        }
    }

    pub fn from_wire(token: &str) -> Option<DateLabel> {
        DateLabel::ALL
            .iter()
            .copied()
            .find(|l| l.wire_token().eq_ignore_ascii_case(token))
    }
}

/// Date filter for the search operation: either a symbolic label or an
/// explicit range. The two forms are mutually exclusive and serialize
/// differently into the `date` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDate {
    Label(DateLabel),
    Range { from: NaiveDate, to: NaiveDate },
}

impl SearchDate {
    /// The value of the `date` query parameter: the label's wire token, or
    /// the range as two space-separated ISO dates.
    pub fn to_query_value(self) -> String {
        match self {
            SearchDate::Label(label) => label.wire_token().to_string(),
            SearchDate::Range { from, to } => format!("{from} {to}"),
        }
    }
}

/// A venue, either standalone (venue_get) or nested inside an event.
/// Coordinates may arrive as quoted strings.
#[derive(Debug, Clone, Deserialize)]
pub struct Venue {
    #[serde(default, deserialize_with = "crate::wire::opt_u64_from_wire")]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub address_2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(deserialize_with = "crate::wire::f64_from_wire")]
    pub latitude: f64,
    #[serde(deserialize_with = "crate::wire::f64_from_wire")]
    pub longitude: f64,
}

/// A single event record.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    #[serde(deserialize_with = "crate::wire::u64_from_wire")]
    pub id: u64,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "crate::wire::tristate_from_wire")]
    pub repeats: TriState,
    #[serde(
        default,
        rename = "category",
        deserialize_with = "crate::wire::categories_from_wire"
    )]
    pub categories: Vec<Category>,
    #[serde(default, deserialize_with = "crate::wire::opt_timezone_from_wire")]
    pub timezone: Option<Tz>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub venue: Option<Venue>,
}

/// Aggregate counts reported alongside a page of search results.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventSummary {
    #[serde(deserialize_with = "crate::wire::u64_from_wire")]
    pub total_items: u64,
    #[serde(deserialize_with = "crate::wire::u64_from_wire")]
    pub first_event: u64,
    #[serde(deserialize_with = "crate::wire::u64_from_wire")]
    pub last_event: u64,
    #[serde(deserialize_with = "crate::wire::u64_from_wire")]
    pub num_showing: u64,
}

/// One element of a search result list. The list is heterogeneous: the
/// service interleaves one aggregate-count record with the full event
/// records, discriminated by shape rather than an explicit tag.
#[derive(Debug, Clone)]
pub enum EventData {
    Summary(EventSummary),
    Full(Box<Event>),
}

impl EventData {
    pub fn as_summary(&self) -> Option<&EventSummary> {
        match self {
            EventData::Summary(summary) => Some(summary),
            EventData::Full(_) => None,
        }
    }

    pub fn as_event(&self) -> Option<&Event> {
        match self {
            EventData::Full(event) => Some(event),
            EventData::Summary(_) => None,
        }
    }
}
