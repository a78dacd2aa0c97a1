//! Typed multi-value property store.
//!
//! A [`Properties`] value maps a key to an ordered sequence of values. The
//! first value is the canonical scalar read. Each registered key has an
//! expected [`PropertyType`]; writes coerce to it and reads convert leniently
//! from the representations found in stored documents.
//!
//! The document encoding is a JSON object whose values are always arrays:
//!
//! ```json
//! {"title": ["Hello"], "checked": [true]}
//! ```

mod coerce;
pub mod keys;
mod value;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

pub use coerce::{coerce, parse_bool, parse_time, property_type, PropertyType};
pub use value::{format_duration, format_rfc3339, PropertyValue};

use crate::error::Result;

/// Per-key ordered sequences of dynamically typed values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Properties(BTreeMap<String, Vec<PropertyValue>>);

/// A `null` slot in a stored document loads as an empty slot.
impl<'de> Deserialize<'de> for Properties {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let slots = BTreeMap::<String, Option<Vec<PropertyValue>>>::deserialize(deserializer)?;
        Ok(Self(
            slots
                .into_iter()
                .map(|(key, values)| (key, values.unwrap_or_default()))
                .collect(),
        ))
    }
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a property document.
    pub fn from_document(doc: &str) -> Result<Self> {
        Ok(serde_json::from_str(doc)?)
    }

    /// Encode as a property document.
    pub fn to_document(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode `doc` onto this store. Keys in the document replace existing
    /// slots wholesale; keys absent from the document are kept.
    pub fn merge_document(&mut self, doc: &str) -> Result<()> {
        let incoming: Properties = serde_json::from_str(doc)?;
        self.0.extend(incoming.0);
        Ok(())
    }

    /// True when the key holds at least one value.
    pub fn has(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(|values| !values.is_empty())
    }

    /// First value of the slot.
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.0.get(key).and_then(|values| values.first())
    }

    /// Entire slot, including an explicitly empty one.
    pub fn get_array(&self, key: &str) -> Option<&[PropertyValue]> {
        self.0.get(key).map(Vec::as_slice)
    }

    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).map(coerce::string_from)
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(coerce::int_from)
    }

    pub fn get_float(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(coerce::float_from)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(coerce::bool_from)
    }

    pub fn get_time(&self, key: &str) -> Option<DateTime<Utc>> {
        self.get(key).and_then(coerce::time_from)
    }

    /// All values of the slot as strings. Nested arrays are flattened.
    pub fn get_string_array(&self, key: &str) -> Option<Vec<String>> {
        let values = self.0.get(key)?;
        let mut out = Vec::with_capacity(values.len());
        for value in values {
            match value {
                PropertyValue::Array(items) => {
                    out.extend(items.iter().map(coerce::string_from));
                }
                PropertyValue::Null => {}
                other => out.push(coerce::string_from(other)),
            }
        }
        Some(out)
    }

    /// `[latitude, longitude]` read from either a single stored pair or two
    /// consecutive scalar values.
    pub fn get_float_pair(&self, key: &str) -> Option<[f64; 2]> {
        let values = self.0.get(key)?;
        match values.as_slice() {
            [PropertyValue::Array(pair), ..] if pair.len() == 2 => {
                Some([coerce::float_from(&pair[0])?, coerce::float_from(&pair[1])?])
            }
            [lat, lng, ..] if lat.is_scalar() && lng.is_scalar() => {
                Some([coerce::float_from(lat)?, coerce::float_from(lng)?])
            }
            _ => None,
        }
    }

    /// Coerce `value` to the key's registered type and append it.
    ///
    /// On failure the slot is left as it was.
    pub fn append_value(&mut self, key: &str, value: impl Into<PropertyValue>) -> Result<()> {
        let value = coerce_logged(key, value.into(), "append_value")?;
        self.0.entry(key.to_string()).or_default().push(value);
        Ok(())
    }

    /// Coerce `value` and overwrite the slot with it alone.
    ///
    /// On failure the slot is left as it was.
    pub fn replace_value(&mut self, key: &str, value: impl Into<PropertyValue>) -> Result<()> {
        let value = coerce_logged(key, value.into(), "replace_value")?;
        self.0.insert(key.to_string(), vec![value]);
        Ok(())
    }

    /// Remove the slot. Returns whether the key existed.
    pub fn delete(&mut self, key: &str) -> bool {
        self.0.remove(key).is_some()
    }

    /// True when no key is present, regardless of slot contents.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[PropertyValue])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Every value in every slot, in key order.
    pub fn values(&self) -> impl Iterator<Item = &PropertyValue> {
        self.0.values().flatten()
    }
}

fn coerce_logged(key: &str, value: PropertyValue, op: &str) -> Result<PropertyValue> {
    coerce(key, value).map_err(|e| {
        debug!(
            subsystem = "core",
            component = "properties",
            op,
            property_key = key,
            error = %e,
            "Property coercion failed"
        );
        e
    })
}
