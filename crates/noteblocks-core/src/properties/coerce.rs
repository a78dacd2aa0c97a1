//! Property type registry and the coercion table.
//!
//! All conversion between representations seen in documents and the type a
//! key is registered with happens here. Mutating store operations call
//! [`coerce`]; typed getters use the lenient `*_from` readers.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::keys;
use super::value::{format_rfc3339, PropertyValue};
use crate::defaults::{DATE_LAYOUT, DATE_TIME_LAYOUT};
use crate::error::{Error, Result};

/// Expected semantic type of a property key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    String,
    Int,
    Float,
    Bool,
    DateTime,
    StringArray,
    /// `[latitude, longitude]` pairs.
    FloatArray,
    /// Unregistered keys; stored without coercion.
    Any,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::Bool => write!(f, "bool"),
            Self::DateTime => write!(f, "datetime"),
            Self::StringArray => write!(f, "string_array"),
            Self::FloatArray => write!(f, "float_array"),
            Self::Any => write!(f, "any"),
        }
    }
}

static PROPERTY_TYPES: Lazy<HashMap<&'static str, PropertyType>> = Lazy::new(|| {
    use PropertyType::*;

    HashMap::from([
        // Common
        (keys::TITLE, String),
        (keys::TEXT, String),
        (keys::DESCRIPTION, String),
        (keys::TARGET_DATETIME, DateTime),
        (keys::REMINDER_OFFSET, Int),
        (keys::CHECKED, Bool),
        (keys::ENRICHED, Bool),
        // URL / link
        (keys::URL, String),
        (keys::IMAGE_URL, String),
        // Movie / TV series
        (keys::IMDB_ID, String),
        (keys::TMDB_ID, String),
        (keys::RELEASE_YEAR, Int),
        (keys::FIRST_AIR_YEAR, Int),
        (keys::LAST_AIR_YEAR, Int),
        (keys::RATING, Float),
        (keys::RUNTIME, Int),
        (keys::GENRES, StringArray),
        (keys::DIRECTORS, StringArray),
        (keys::CREATORS, StringArray),
        (keys::CAST, StringArray),
        (keys::TAGLINE, String),
        (keys::BUDGET, Int),
        (keys::REVENUE, Int),
        (keys::STATUS, String),
        (keys::IN_PRODUCTION, Bool),
        (keys::NUMBER_OF_SEASONS, Int),
        (keys::NUMBER_OF_EPISODES, Int),
        (keys::NETWORKS, StringArray),
        (keys::TYPE, String),
        // YouTube
        (keys::VIDEO_ID, String),
        (keys::CHANNEL_ID, String),
        (keys::CHANNEL_TITLE, String),
        (keys::PUBLISHED_AT, DateTime),
        (keys::VIEW_COUNT, Int),
        (keys::LIKE_COUNT, Int),
        (keys::COMMENT_COUNT, Int),
        (keys::DURATION, String),
        (keys::DEFINITION, String),
        (keys::HAS_CAPTIONS, Bool),
        (keys::TAGS, StringArray),
        // Tweet
        (keys::TWEET_ID, String),
        (keys::USERNAME, String),
        (keys::AUTHOR_NAME, String),
        (keys::RETWEET_COUNT, Int),
        (keys::AUTHOR_ID, String),
        (keys::MEDIA_URLS, StringArray),
        (keys::MEDIA_INFO, StringArray),
        (keys::EXTERNAL_URLS, StringArray),
        (keys::QUOTE_COUNT, Int),
        (keys::CONVERSATION_ID, String),
        (keys::LANGUAGE, String),
        (keys::SOURCE, String),
        (keys::HAS_MEDIA, Bool),
        (keys::MEDIA_COUNT, Int),
        (keys::IS_RETWEET, Bool),
        (keys::IS_REPLY, Bool),
        (keys::IS_QUOTE, Bool),
        // Email
        (keys::EMAIL_ID, String),
        (keys::THREAD_ID, String),
        (keys::FROM, String),
        (keys::TO, StringArray),
        (keys::SUBJECT, String),
        (keys::DATE, DateTime),
        (keys::RECEIVED_AT, DateTime),
        (keys::ATTACHMENTS, StringArray),
        (keys::LABELS, StringArray),
        // Book
        (keys::ISBN, String),
        (keys::PUBLISHER, String),
        (keys::PAGE_COUNT, Int),
        (keys::PRICE, Float),
        (keys::AUTHOR_BIO, String),
        (keys::TABLE_OF_CONTENTS, String),
        (keys::REVIEWS, StringArray),
        // Person
        (keys::FIRST_NAME, String),
        (keys::LAST_NAME, String),
        (keys::BIRTHDAY, DateTime),
        (keys::RELATION_TYPE, String),
        (keys::ADDRESS, String),
        (keys::PHONE_NUMBER, String),
        // Place
        (keys::PLACE_TYPE, String),
        (keys::COORDINATES, FloatArray),
        (keys::MAP_URL, String),
        (keys::VISITED_DATE, DateTime),
        (keys::PLACE_REVIEWS, StringArray),
        // Media
        (keys::SIZE, Int),
        (keys::TRANSCRIPTION, String),
        (keys::PUBLIC_URL, String),
        (keys::FILENAME, String),
        (keys::EXTENSION, String),
    ])
});

/// Expected type for a property key; unregistered keys are [`PropertyType::Any`].
pub fn property_type(key: &str) -> PropertyType {
    PROPERTY_TYPES
        .get(key)
        .copied()
        .unwrap_or(PropertyType::Any)
}

/// Convert `value` to the type registered for `key`.
///
/// Fails instead of dropping information: fractional numbers are never
/// truncated into integers and unparsable strings are rejected.
pub fn coerce(key: &str, value: PropertyValue) -> Result<PropertyValue> {
    let expected = property_type(key);
    coerce_to(expected, value).map_err(|reason| Error::Coercion {
        key: key.to_string(),
        expected,
        reason,
    })
}

fn coerce_to(expected: PropertyType, value: PropertyValue) -> std::result::Result<PropertyValue, String> {
    match expected {
        PropertyType::Any => Ok(value),
        PropertyType::String => coerce_string(value),
        PropertyType::Int => match value {
            PropertyValue::Int(i) => Ok(PropertyValue::Int(i)),
            PropertyValue::Float(f) => int_from_float(f)
                .map(PropertyValue::Int)
                .ok_or_else(|| format!("{f} is not a whole number")),
            PropertyValue::String(s) => s
                .parse::<i64>()
                .map(PropertyValue::Int)
                .map_err(|e| format!("cannot parse {s:?}: {e}")),
            PropertyValue::Duration(d) => Ok(PropertyValue::Int(d.num_seconds())),
            other => Err(unsupported(&other)),
        },
        PropertyType::Float => match value {
            PropertyValue::Float(f) => Ok(PropertyValue::Float(f)),
            PropertyValue::Int(i) => Ok(PropertyValue::Float(i as f64)),
            PropertyValue::String(s) => s
                .parse::<f64>()
                .map(PropertyValue::Float)
                .map_err(|e| format!("cannot parse {s:?}: {e}")),
            other => Err(unsupported(&other)),
        },
        PropertyType::Bool => match value {
            PropertyValue::Bool(b) => Ok(PropertyValue::Bool(b)),
            PropertyValue::String(s) => parse_bool(&s)
                .map(PropertyValue::Bool)
                .ok_or_else(|| format!("cannot parse {s:?} as bool")),
            PropertyValue::Int(i) => Ok(PropertyValue::Bool(i != 0)),
            PropertyValue::Float(f) => Ok(PropertyValue::Bool(f != 0.0)),
            other => Err(unsupported(&other)),
        },
        PropertyType::DateTime => match value {
            PropertyValue::DateTime(t) => Ok(PropertyValue::DateTime(t)),
            PropertyValue::String(s) => parse_time(&s)
                .map(PropertyValue::DateTime)
                .ok_or_else(|| format!("cannot parse {s:?} as time")),
            other => Err(unsupported(&other)),
        },
        PropertyType::StringArray => match value {
            PropertyValue::Array(items) => items
                .into_iter()
                .map(coerce_string)
                .collect::<std::result::Result<Vec<_>, _>>()
                .map(PropertyValue::Array),
            other => coerce_string(other),
        },
        PropertyType::FloatArray => match value {
            PropertyValue::Array(items) => {
                if items.len() != 2 {
                    return Err(format!(
                        "expected [latitude, longitude], got {} values",
                        items.len()
                    ));
                }
                let pair = items
                    .iter()
                    .map(|v| float_from(v).ok_or_else(|| unsupported(v)))
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(PropertyValue::Array(
                    pair.into_iter().map(PropertyValue::Float).collect(),
                ))
            }
            other => float_from(&other)
                .map(PropertyValue::Float)
                .ok_or_else(|| unsupported(&other)),
        },
    }
}

fn coerce_string(value: PropertyValue) -> std::result::Result<PropertyValue, String> {
    match value {
        PropertyValue::String(s) => Ok(PropertyValue::String(s)),
        PropertyValue::Null | PropertyValue::Array(_) | PropertyValue::Object(_) => {
            Err(unsupported(&value))
        }
        scalar => Ok(PropertyValue::String(scalar.to_display_string())),
    }
}

fn unsupported(value: &PropertyValue) -> String {
    format!("unsupported {} value", value.type_name())
}

// =============================================================================
// LENIENT READERS (typed getters)
// =============================================================================

/// Whole-number conversion of a float; `None` when it would lose information.
pub(crate) fn int_from_float(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

pub(crate) fn int_from(value: &PropertyValue) -> Option<i64> {
    match value {
        PropertyValue::Int(i) => Some(*i),
        PropertyValue::Float(f) => int_from_float(*f),
        PropertyValue::String(s) => s.parse().ok(),
        PropertyValue::Duration(d) => Some(d.num_seconds()),
        _ => None,
    }
}

pub(crate) fn float_from(value: &PropertyValue) -> Option<f64> {
    match value {
        PropertyValue::Float(f) => Some(*f),
        PropertyValue::Int(i) => Some(*i as f64),
        PropertyValue::String(s) => s.parse().ok(),
        _ => None,
    }
}

pub(crate) fn bool_from(value: &PropertyValue) -> Option<bool> {
    match value {
        PropertyValue::Bool(b) => Some(*b),
        PropertyValue::String(s) => parse_bool(s),
        PropertyValue::Int(i) => Some(*i != 0),
        PropertyValue::Float(f) => Some(*f != 0.0),
        _ => None,
    }
}

pub(crate) fn time_from(value: &PropertyValue) -> Option<DateTime<Utc>> {
    match value {
        PropertyValue::DateTime(t) => Some(*t),
        PropertyValue::String(s) => parse_time(s),
        _ => None,
    }
}

pub(crate) fn string_from(value: &PropertyValue) -> String {
    match value {
        PropertyValue::String(s) => s.clone(),
        PropertyValue::DateTime(t) => format_rfc3339(t),
        other => other.to_display_string(),
    }
}

/// Parse the boolean spellings accepted in documents.
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

/// Parse a timestamp against the accepted layouts, first match wins:
/// RFC 3339, date-only, then space-separated date-time (both read as UTC).
pub fn parse_time(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t.with_timezone(&Utc));
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, DATE_LAYOUT) {
        return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, DATE_TIME_LAYOUT) {
        return Some(dt.and_utc());
    }
    None
}
