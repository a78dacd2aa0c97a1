//! YouTube videos.

use chrono::{DateTime, Utc};
use noteblocks_core::properties::parse_time;
use noteblocks_core::{keys, Block, Result};
use tracing::debug;

use super::{non_empty, set_opt};
use crate::page::{Metadata, PageData};

/// Fields written by [`add_youtube_properties`].
#[derive(Debug, Clone, Default)]
pub struct YouTubeFields {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Thumbnail.
    pub image_url: Option<String>,
    pub url: Option<String>,
    pub video_id: Option<String>,
    pub channel_id: Option<String>,
    pub channel_title: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub view_count: Option<i64>,
    pub like_count: Option<i64>,
    pub comment_count: Option<i64>,
    /// Display duration as reported by the platform, e.g. `12:04`.
    pub duration: Option<String>,
    /// `hd` or `sd`.
    pub definition: Option<String>,
    pub has_captions: Option<bool>,
    /// Empty lists are not stored.
    pub tags: Vec<String>,
    /// Watched. Not stored when not given.
    pub checked: Option<bool>,
    pub enriched: bool,
}

pub fn add_youtube_properties(block: &mut Block, fields: YouTubeFields) -> Result<()> {
    set_opt(block, keys::TITLE, fields.title)?;
    set_opt(block, keys::DESCRIPTION, fields.description)?;
    set_opt(block, keys::IMAGE_URL, fields.image_url)?;
    set_opt(block, keys::URL, fields.url)?;
    set_opt(block, keys::VIDEO_ID, fields.video_id)?;
    set_opt(block, keys::CHANNEL_ID, fields.channel_id)?;
    set_opt(block, keys::CHANNEL_TITLE, fields.channel_title)?;
    set_opt(block, keys::PUBLISHED_AT, fields.published_at)?;
    set_opt(block, keys::VIEW_COUNT, fields.view_count)?;
    set_opt(block, keys::LIKE_COUNT, fields.like_count)?;
    set_opt(block, keys::COMMENT_COUNT, fields.comment_count)?;
    set_opt(block, keys::DURATION, fields.duration)?;
    set_opt(block, keys::DEFINITION, fields.definition)?;
    set_opt(block, keys::HAS_CAPTIONS, fields.has_captions)?;
    set_opt(block, keys::CHECKED, fields.checked)?;
    if !fields.tags.is_empty() {
        block.properties.replace_value(keys::TAGS, fields.tags)?;
    }
    block.properties.replace_value(keys::ENRICHED, fields.enriched)
}

/// Store a scraped video page as an enriched YouTube block.
///
/// An unparsable `published_at` is dropped.
pub fn add_youtube_properties_from_page<P: PageData + ?Sized>(
    block: &mut Block,
    page: &P,
) -> Result<()> {
    let meta = Metadata::of(page);
    let published_at = meta.string("published_at").and_then(|raw| {
        let parsed = parse_time(&raw);
        if parsed.is_none() {
            debug!(
                subsystem = "kinds",
                component = "youtube",
                property_key = keys::PUBLISHED_AT,
                raw = %raw,
                "Dropping unparsable publish date"
            );
        }
        parsed
    });

    add_youtube_properties(
        block,
        YouTubeFields {
            title: Some(page.title().to_string()),
            description: Some(page.description().to_string()),
            image_url: Some(page.image().to_string()),
            url: Some(page.url().to_string()),
            video_id: meta.string("video_id"),
            channel_id: meta.string("channel_id"),
            channel_title: meta.string("channel_title"),
            published_at,
            view_count: meta.int("view_count"),
            like_count: meta.int("like_count"),
            comment_count: meta.int("comment_count"),
            duration: meta.string("duration"),
            definition: meta.string("definition"),
            has_captions: meta.flag("has_captions"),
            tags: meta.list("tags").unwrap_or_default(),
            checked: meta.flag("checked"),
            enriched: true,
        },
    )
}

pub fn render_youtube_properties(block: &Block) -> String {
    let mut parts = Vec::new();

    let prefix = match block.properties.get_bool(keys::CHECKED) {
        Some(true) => "- [x] ",
        Some(false) => "- [ ] ",
        None => "",
    };

    let url = non_empty(block, keys::URL);
    match (non_empty(block, keys::TITLE), url) {
        (Some(title), Some(url)) => parts.push(format!("{prefix}## [{title}]({url})")),
        (Some(title), None) => parts.push(format!("{prefix}## {title}")),
        (None, Some(url)) => parts.push(format!("{prefix}## [YouTube Video]({url})")),
        (None, None) => {}
    }

    if let Some(channel) = non_empty(block, keys::CHANNEL_TITLE) {
        parts.push(format!("**Channel:** {channel}"));
    }

    let mut stats = Vec::new();
    if let Some(duration) = non_empty(block, keys::DURATION) {
        stats.push(format!("Duration: {duration}"));
    }
    if let Some(views) = block.properties.get_int(keys::VIEW_COUNT) {
        stats.push(format!("Views: {views}"));
    }
    if !stats.is_empty() {
        parts.push(format!("**Stats:** {}", stats.join(" | ")));
    }

    if let Some(description) = non_empty(block, keys::DESCRIPTION) {
        parts.push(format!("\n{description}"));
    }

    parts.join("\n")
}

pub fn youtube_property_keys() -> &'static [&'static str] {
    &[
        keys::TITLE,
        keys::DESCRIPTION,
        keys::IMAGE_URL,
        keys::URL,
        keys::VIDEO_ID,
        keys::CHANNEL_ID,
        keys::CHANNEL_TITLE,
        keys::PUBLISHED_AT,
        keys::VIEW_COUNT,
        keys::LIKE_COUNT,
        keys::COMMENT_COUNT,
        keys::DURATION,
        keys::DEFINITION,
        keys::HAS_CAPTIONS,
        keys::TAGS,
        keys::ENRICHED,
        keys::CHECKED,
    ]
}
