//! Web links.

use noteblocks_core::{keys, Block, Error, Result};
use serde::{Deserialize, Serialize};

use super::non_empty;
use crate::page::PageData;

/// Fields written by [`add_link_properties`].
#[derive(Debug, Clone, Default)]
pub struct LinkFields {
    pub url: Option<String>,
    pub title: Option<String>,
    /// Stored only when non-empty.
    pub description: Option<String>,
    /// Stored only when non-empty.
    pub image_url: Option<String>,
    pub enriched: bool,
}

/// Link payload as produced by the enrichment pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkData {
    pub url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image_url: String,
}

pub fn add_link_properties(block: &mut Block, fields: LinkFields) -> Result<()> {
    if let Some(url) = fields.url {
        block.properties.replace_value(keys::URL, url)?;
    }
    if let Some(title) = fields.title {
        block.properties.replace_value(keys::TITLE, title)?;
    }
    if let Some(description) = fields.description.filter(|s| !s.is_empty()) {
        block.properties.replace_value(keys::DESCRIPTION, description)?;
    }
    if let Some(image_url) = fields.image_url.filter(|s| !s.is_empty()) {
        block.properties.replace_value(keys::IMAGE_URL, image_url)?;
    }
    block.properties.replace_value(keys::ENRICHED, fields.enriched)
}

/// Decode a [`LinkData`] payload and store it as an enriched link.
///
/// Fails with `Serialization` on malformed JSON and `InvalidInput` when the
/// payload has no URL. Nothing is written on failure.
pub fn add_link_properties_from_json(block: &mut Block, raw: &str) -> Result<()> {
    let data: LinkData = serde_json::from_str(raw)?;
    if data.url.is_empty() {
        return Err(Error::InvalidInput("link data must include a URL".to_string()));
    }

    add_link_properties(
        block,
        LinkFields {
            url: Some(data.url),
            title: Some(data.title).filter(|s| !s.is_empty()),
            description: Some(data.description),
            image_url: Some(data.image_url),
            enriched: true,
        },
    )
}

/// Store a scraped page as an enriched link. The page must carry a URL.
pub fn add_link_properties_from_page<P: PageData + ?Sized>(
    block: &mut Block,
    page: &P,
) -> Result<()> {
    if page.url().is_empty() {
        return Err(Error::InvalidInput("page must include a URL".to_string()));
    }

    add_link_properties(
        block,
        LinkFields {
            url: Some(page.url().to_string()),
            title: Some(page.title().to_string()),
            description: Some(page.description().to_string()),
            image_url: Some(page.image().to_string()),
            enriched: true,
        },
    )
}

/// `[title](url) - description`, degrading to `[title](url)`, the bare URL,
/// the bare title, or nothing.
pub fn render_link_properties(block: &Block) -> String {
    let url = non_empty(block, keys::URL);
    let title = non_empty(block, keys::TITLE);
    let description = non_empty(block, keys::DESCRIPTION);

    match (url, title) {
        (Some(url), Some(title)) => match description {
            Some(description) => format!("[{title}]({url}) - {description}"),
            None => format!("[{title}]({url})"),
        },
        (Some(url), None) => url,
        (None, Some(title)) => title,
        (None, None) => String::new(),
    }
}

pub fn link_property_keys() -> &'static [&'static str] {
    &[
        keys::TITLE,
        keys::URL,
        keys::DESCRIPTION,
        keys::IMAGE_URL,
        keys::ENRICHED,
    ]
}
