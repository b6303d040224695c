//! Wire-format adapters for the loosely-typed fields of the JSON API.
//!
//! The service quotes numbers as strings at random, encodes booleans as
//! "yes"/"no", comma-joins category lists, and names time zones by their
//! IANA identifier. Each adapter here maps one of those wire shapes onto a
//! native type, and every mismatch is a hard deserialization error — a
//! silently defaulted category or coordinate would corrupt everything
//! downstream.

use std::str::FromStr;

use chrono_tz::Tz;
use serde::de::{self, Deserializer};
use serde::Deserialize;

use crate::model::{Category, TriState};

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(u64),
    Str(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FloatOrString {
    Float(f64),
    Str(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolOrString {
    Bool(bool),
    Str(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// Integers may arrive quoted ("5396196168") or bare (5396196168).
pub(crate) fn u64_from_wire<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(n) => Ok(n),
        IntOrString::Str(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid integer {s:?}"))),
    }
}

pub(crate) fn opt_u64_from_wire<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IntOrString::Int(n)) => Ok(Some(n)),
        Some(IntOrString::Str(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid integer {s:?}"))),
    }
}

/// Coordinates may arrive quoted ("37.77493") or bare (37.77493).
pub(crate) fn f64_from_wire<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match FloatOrString::deserialize(deserializer)? {
        FloatOrString::Float(n) => Ok(n),
        FloatOrString::Str(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid number {s:?}"))),
    }
}

/// "yes"/"no" strings and JSON booleans both occur on the wire; an absent
/// field stays `TriState::Unknown` via `#[serde(default)]`. Anything else is
/// an error rather than a guessed default.
pub(crate) fn tristate_from_wire<'de, D>(deserializer: D) -> Result<TriState, D::Error>
where
    D: Deserializer<'de>,
{
    match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(true) => Ok(TriState::True),
        BoolOrString::Bool(false) => Ok(TriState::False),
        BoolOrString::Str(s) if s.eq_ignore_ascii_case("yes") => Ok(TriState::True),
        BoolOrString::Str(s) if s.eq_ignore_ascii_case("no") => Ok(TriState::False),
        BoolOrString::Str(s) => Err(de::Error::custom(format!("invalid boolean {s:?}"))),
    }
}

/// Category sets arrive either comma-joined ("conferences,sales") or as an
/// array of tokens. Matching is case-insensitive; an unknown token fails the
/// decode.
pub(crate) fn categories_from_wire<'de, D>(deserializer: D) -> Result<Vec<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    let tokens = match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(s) => s.split(',').map(str::to_string).collect(),
        OneOrMany::Many(v) => v,
    };

    tokens
        .iter()
        .map(|token| {
            let token = token.trim();
            Category::from_wire(token)
                .ok_or_else(|| de::Error::custom(format!("unknown category {token:?}")))
        })
        .collect()
}

/// Time zones arrive as IANA names ("America/Los_Angeles"); an unrecognized
/// name fails the decode.
pub(crate) fn opt_timezone_from_wire<'de, D>(deserializer: D) -> Result<Option<Tz>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(name) => Tz::from_str(&name)
            .map(Some)
            .map_err(|_| de::Error::custom(format!("unknown time zone {name:?}"))),
    }
}
