//! Scraped page data consumed by the `add_*_properties_from_page` adapters.
//!
//! Scrapers describe a fetched page through [`PageData`]: the common
//! title/description/image fields plus a flat string map of kind-specific
//! metadata (`"release_year" => "1995"`, `"genres" => "Crime, Drama"`).
//! [`Metadata`] reads that map with the conventions the scrapers use.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A fetched web page, as far as the adapters are concerned.
pub trait PageData {
    /// URL the page was fetched from.
    fn url(&self) -> &str;

    fn title(&self) -> &str;

    /// Short description, usually from the page's meta tags.
    fn description(&self) -> &str;

    /// Full body text.
    fn body(&self) -> &str;

    /// Preview image URL.
    fn image(&self) -> &str;

    /// Kind-specific extras keyed by property name.
    fn custom_metadata(&self) -> &HashMap<String, String>;
}

/// Plain [`PageData`] value, loadable from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    pub url: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub image: String,
    pub custom_metadata: HashMap<String, String>,
}

impl PageData for Page {
    fn url(&self) -> &str {
        &self.url
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn body(&self) -> &str {
        &self.body
    }

    fn image(&self) -> &str {
        &self.image
    }

    fn custom_metadata(&self) -> &HashMap<String, String> {
        &self.custom_metadata
    }
}

/// Typed reads over a page's custom metadata.
///
/// Empty strings count as absent. Numbers that fail to parse are dropped
/// with a debug log.
#[derive(Debug, Clone, Copy)]
pub struct Metadata<'a>(&'a HashMap<String, String>);

/// Placeholder scrapers write for an unknown year.
const UNKNOWN: &str = "Unknown";

impl<'a> Metadata<'a> {
    pub fn of<P: PageData + ?Sized>(page: &'a P) -> Self {
        Self(page.custom_metadata())
    }

    pub fn string(&self, key: &str) -> Option<String> {
        self.0.get(key).filter(|v| !v.is_empty()).cloned()
    }

    pub fn int(&self, key: &str) -> Option<i64> {
        let raw = self.0.get(key).filter(|v| !v.is_empty() && *v != UNKNOWN)?;
        parsed(key, raw, raw.trim().parse())
    }

    pub fn float(&self, key: &str) -> Option<f64> {
        let raw = self.0.get(key).filter(|v| !v.is_empty())?;
        parsed(key, raw, raw.trim().parse())
    }

    /// `Some(value == "true")` whenever the key is present, even if empty.
    pub fn flag(&self, key: &str) -> Option<bool> {
        self.0.get(key).map(|v| v == "true")
    }

    /// `", "`-separated list.
    pub fn list(&self, key: &str) -> Option<Vec<String>> {
        let raw = self.0.get(key).filter(|v| !v.is_empty())?;
        Some(raw.split(", ").map(str::to_string).collect())
    }
}

fn parsed<T, E: std::fmt::Display>(key: &str, raw: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(
                subsystem = "kinds",
                component = "page",
                property_key = key,
                raw,
                error = %e,
                "Dropping unparsable page metadata"
            );
            None
        }
    }
}
