//! Dynamically typed property values.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value as JsonValue};

/// A single value held in a property slot.
///
/// Values arriving from documents are plain JSON; values written by adapters
/// may carry richer in-memory types (`DateTime`, `Duration`) that serialize
/// back to JSON as an RFC 3339 string and whole seconds respectively.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    DateTime(DateTime<Utc>),
    Duration(Duration),
    Array(Vec<PropertyValue>),
    Object(Map<String, JsonValue>),
}

impl PropertyValue {
    /// Short name of the variant, used in coercion error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::DateTime(_) => "datetime",
            Self::Duration(_) => "duration",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Borrow the inner string, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// True for values that carry no content: null or the empty string.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// True for values that are not arrays or objects.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Self::Array(_) | Self::Object(_))
    }

    /// Human-readable representation used when a non-string value is read as text.
    pub fn to_display_string(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::String(s) => s.clone(),
            Self::DateTime(t) => format_rfc3339(t),
            Self::Duration(d) => format_duration(d),
            Self::Array(items) => {
                let inner: Vec<String> = items.iter().map(|v| v.to_display_string()).collect();
                format!("[{}]", inner.join(" "))
            }
            Self::Object(map) => JsonValue::Object(map.clone()).to_string(),
        }
    }

    /// Convert to the JSON representation used in property documents.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::Null => JsonValue::Null,
            Self::Bool(b) => JsonValue::Bool(*b),
            Self::Int(i) => JsonValue::from(*i),
            Self::Float(f) => JsonValue::from(*f),
            Self::String(s) => JsonValue::String(s.clone()),
            Self::DateTime(t) => JsonValue::String(format_rfc3339(t)),
            Self::Duration(d) => JsonValue::from(d.num_seconds()),
            Self::Array(items) => JsonValue::Array(items.iter().map(|v| v.to_json()).collect()),
            Self::Object(map) => JsonValue::Object(map.clone()),
        }
    }
}

/// RFC 3339 with a `Z` suffix and only as many fractional digits as needed.
pub fn format_rfc3339(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Format a duration as hours, minutes and seconds, e.g. `1h30m0s`, `15m0s`, `45s`.
pub fn format_duration(d: &Duration) -> String {
    let total = d.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.unsigned_abs();
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);

    if hours > 0 {
        format!("{sign}{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{sign}{minutes}m{seconds}s")
    } else {
        format!("{sign}{seconds}s")
    }
}

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::String(s) => serializer.serialize_str(s),
            Self::DateTime(t) => serializer.serialize_str(&format_rfc3339(t)),
            Self::Duration(d) => serializer.serialize_i64(d.num_seconds()),
            Self::Array(items) => items.serialize(serializer),
            Self::Object(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for PropertyValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        JsonValue::deserialize(deserializer).map(PropertyValue::from)
    }
}

impl From<JsonValue> for PropertyValue {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Bool(b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            JsonValue::String(s) => Self::String(s),
            JsonValue::Array(items) => {
                Self::Array(items.into_iter().map(PropertyValue::from).collect())
            }
            JsonValue::Object(map) => Self::Object(map),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for PropertyValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u64> for PropertyValue {
    fn from(value: u64) -> Self {
        i64::try_from(value)
            .map(Self::Int)
            .unwrap_or(Self::Float(value as f64))
    }
}

impl From<usize> for PropertyValue {
    fn from(value: usize) -> Self {
        i64::try_from(value)
            .map(Self::Int)
            .unwrap_or(Self::Float(value as f64))
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for PropertyValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for PropertyValue {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<DateTime<Utc>> for PropertyValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl From<Duration> for PropertyValue {
    fn from(value: Duration) -> Self {
        Self::Duration(value)
    }
}

impl<T: Into<PropertyValue>> From<Vec<T>> for PropertyValue {
    fn from(values: Vec<T>) -> Self {
        Self::Array(values.into_iter().map(Into::into).collect())
    }
}

impl From<[f64; 2]> for PropertyValue {
    fn from(pair: [f64; 2]) -> Self {
        Self::Array(vec![Self::Float(pair[0]), Self::Float(pair[1])])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_from_json_numbers() {
        assert_eq!(PropertyValue::from(json!(42)), PropertyValue::Int(42));
        assert_eq!(PropertyValue::from(json!(7.5)), PropertyValue::Float(7.5));
        assert_eq!(PropertyValue::from(json!(2.0)), PropertyValue::Float(2.0));
    }

    #[test]
    fn test_from_json_nested() {
        let value = PropertyValue::from(json!([1, "a", null]));
        assert_eq!(
            value,
            PropertyValue::Array(vec![
                PropertyValue::Int(1),
                PropertyValue::String("a".to_string()),
                PropertyValue::Null,
            ])
        );
    }

    #[test]
    fn test_serialize_datetime_as_rfc3339() {
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let json = serde_json::to_string(&PropertyValue::DateTime(t)).unwrap();
        assert_eq!(json, "\"2024-03-01T12:30:00Z\"");
    }

    #[test]
    fn test_serialize_duration_as_seconds() {
        let json = serde_json::to_string(&PropertyValue::Duration(Duration::minutes(15))).unwrap();
        assert_eq!(json, "900");
    }

    #[test]
    fn test_is_blank() {
        assert!(PropertyValue::Null.is_blank());
        assert!(PropertyValue::String(String::new()).is_blank());
        assert!(!PropertyValue::String("x".to_string()).is_blank());
        assert!(!PropertyValue::Bool(false).is_blank());
        assert!(!PropertyValue::Int(0).is_blank());
    }

    #[test]
    fn test_display_string() {
        assert_eq!(PropertyValue::Int(5).to_display_string(), "5");
        assert_eq!(PropertyValue::Float(2024.0).to_display_string(), "2024");
        assert_eq!(PropertyValue::Bool(true).to_display_string(), "true");
        assert_eq!(
            PropertyValue::from(vec!["a", "b"]).to_display_string(),
            "[a b]"
        );
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(&Duration::seconds(45)), "45s");
        assert_eq!(format_duration(&Duration::minutes(15)), "15m0s");
        assert_eq!(format_duration(&Duration::minutes(90)), "1h30m0s");
        assert_eq!(format_duration(&Duration::zero()), "0s");
    }
}
