//! Tweets.
//!
//! Three ways in: hand-filled [`TweetFields`], a structured [`TweetData`]
//! payload from the platform API (directly or as JSON), or a scraped page.

use chrono::{DateTime, Utc};
use noteblocks_core::properties::{format_rfc3339, parse_time};
use noteblocks_core::{keys, Block, Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{non_empty, set_list, set_opt};
use crate::page::{Metadata, PageData};

/// Fields written by [`add_tweet_properties`].
#[derive(Debug, Clone, Default)]
pub struct TweetFields {
    pub url: Option<String>,
    /// Tweet text.
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub tweet_id: Option<String>,
    /// Handle without the `@`.
    pub username: Option<String>,
    pub author_name: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub like_count: Option<i64>,
    pub retweet_count: Option<i64>,
    /// Replies.
    pub comment_count: Option<i64>,
    pub enriched: bool,
}

/// One attached media item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweetMedia {
    pub media_key: String,
    #[serde(rename = "type")]
    pub media_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(rename = "preview_image_url", skip_serializing_if = "String::is_empty")]
    pub preview_url: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub width: u32,
    #[serde(skip_serializing_if = "is_zero")]
    pub height: u32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub alt_text: String,
}

/// A link found in the tweet text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweetLink {
    /// Shortened URL as it appears in the text.
    pub url: String,
    pub expanded_url: String,
    pub display_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Final URL after all redirects.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub unwound_url: String,
}

/// Structured tweet as returned by the platform API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweetData {
    pub id: String,
    pub author_id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    pub url: String,
    pub username: String,
    pub author_name: String,
    pub image_url: String,
    pub media_urls: Vec<String>,
    pub media: Vec<TweetMedia>,
    pub external_urls: Vec<TweetLink>,
    pub like_count: i64,
    pub retweet_count: i64,
    pub comment_count: i64,
    pub quote_count: i64,
    pub conversation_id: String,
    pub language: String,
    pub source: String,
    pub has_media: bool,
    pub media_count: i64,
    pub is_retweet: bool,
    pub is_reply: bool,
    pub is_quote: bool,
}

fn is_zero(n: &u32) -> bool {
    *n == 0
}

pub fn add_tweet_properties(block: &mut Block, fields: TweetFields) -> Result<()> {
    set_opt(block, keys::URL, fields.url)?;
    set_opt(block, keys::TITLE, fields.title)?;
    set_opt(block, keys::DESCRIPTION, fields.description)?;
    set_opt(block, keys::IMAGE_URL, fields.image_url)?;
    set_opt(block, keys::TWEET_ID, fields.tweet_id)?;
    set_opt(block, keys::USERNAME, fields.username)?;
    set_opt(block, keys::AUTHOR_NAME, fields.author_name)?;
    set_opt(block, keys::PUBLISHED_AT, fields.published_at)?;
    set_opt(block, keys::LIKE_COUNT, fields.like_count)?;
    set_opt(block, keys::RETWEET_COUNT, fields.retweet_count)?;
    set_opt(block, keys::COMMENT_COUNT, fields.comment_count)?;
    block.properties.replace_value(keys::ENRICHED, fields.enriched)
}

/// Store a structured tweet as an enriched tweet block.
///
/// Identity, text, counters and the type flags are always written. Optional
/// strings are written when non-empty and the quote and media counts when
/// positive. The media and link lists replace whatever was stored.
pub fn add_tweet_properties_from_data(block: &mut Block, tweet: &TweetData) -> Result<()> {
    let props = &mut block.properties;
    props.replace_value(keys::URL, tweet.url.as_str())?;
    props.replace_value(keys::TITLE, tweet.text.as_str())?;
    props.replace_value(keys::TWEET_ID, tweet.id.as_str())?;
    props.replace_value(keys::AUTHOR_ID, tweet.author_id.as_str())?;

    for (key, value) in [
        (keys::USERNAME, &tweet.username),
        (keys::AUTHOR_NAME, &tweet.author_name),
        (keys::IMAGE_URL, &tweet.image_url),
        (keys::CONVERSATION_ID, &tweet.conversation_id),
        (keys::LANGUAGE, &tweet.language),
        (keys::SOURCE, &tweet.source),
    ] {
        if !value.is_empty() {
            props.replace_value(key, value.as_str())?;
        }
    }

    if let Some(created_at) = tweet.created_at {
        props.replace_value(keys::PUBLISHED_AT, created_at)?;
    }

    props.replace_value(keys::LIKE_COUNT, tweet.like_count)?;
    props.replace_value(keys::RETWEET_COUNT, tweet.retweet_count)?;
    props.replace_value(keys::COMMENT_COUNT, tweet.comment_count)?;
    if tweet.quote_count > 0 {
        props.replace_value(keys::QUOTE_COUNT, tweet.quote_count)?;
    }

    props.replace_value(keys::HAS_MEDIA, tweet.has_media)?;
    if tweet.media_count > 0 {
        props.replace_value(keys::MEDIA_COUNT, tweet.media_count)?;
    }

    let media_info: Vec<String> = tweet
        .media
        .iter()
        .map(|m| format!("{}:{}", m.media_key, m.url))
        .collect();
    let external: Vec<String> = tweet
        .external_urls
        .iter()
        .map(|link| link.expanded_url.clone())
        .collect();
    set_list(block, keys::MEDIA_URLS, &tweet.media_urls)?;
    set_list(block, keys::MEDIA_INFO, &media_info)?;
    set_list(block, keys::EXTERNAL_URLS, &external)?;

    let props = &mut block.properties;
    props.replace_value(keys::IS_RETWEET, tweet.is_retweet)?;
    props.replace_value(keys::IS_REPLY, tweet.is_reply)?;
    props.replace_value(keys::IS_QUOTE, tweet.is_quote)?;
    props.replace_value(keys::ENRICHED, true)
}

/// Decode a [`TweetData`] payload and store it.
///
/// Fails with `InvalidInput` on an empty payload and `Serialization` on
/// malformed JSON. Nothing is written on failure.
pub fn add_tweet_properties_from_json(block: &mut Block, raw: &str) -> Result<()> {
    if raw.trim().is_empty() {
        return Err(Error::InvalidInput("tweet payload is empty".to_string()));
    }
    let tweet: TweetData = serde_json::from_str(raw)?;
    add_tweet_properties_from_data(block, &tweet)
}

/// Store a scraped tweet page as an enriched tweet.
///
/// Custom metadata supplies `tweet_id`, `username`, `author_name`,
/// `tweeted_at`, `likes_count`, `retweets_count` and `replies_count`. An
/// unparsable `tweeted_at` is dropped.
pub fn add_tweet_properties_from_page<P: PageData + ?Sized>(
    block: &mut Block,
    page: &P,
) -> Result<()> {
    let meta = Metadata::of(page);
    let published_at = meta.string("tweeted_at").and_then(|raw| {
        let parsed = parse_time(&raw);
        if parsed.is_none() {
            debug!(
                subsystem = "kinds",
                component = "tweet",
                property_key = keys::PUBLISHED_AT,
                raw = %raw,
                "Dropping unparsable tweet date"
            );
        }
        parsed
    });

    add_tweet_properties(
        block,
        TweetFields {
            url: Some(page.url().to_string()),
            title: Some(page.title().to_string()),
            description: Some(page.description().to_string()),
            image_url: Some(page.image().to_string()),
            tweet_id: meta.string("tweet_id"),
            username: meta.string("username"),
            author_name: meta.string("author_name"),
            published_at,
            like_count: meta.int("likes_count"),
            retweet_count: meta.int("retweets_count"),
            comment_count: meta.int("replies_count"),
            enriched: true,
        },
    )
}

/// Type badges, author line, text, media, links, counters and a permalink,
/// each section closed by a blank line.
pub fn render_tweet_properties(block: &Block) -> String {
    let props = &block.properties;
    let mut out = String::new();

    let badges: Vec<&str> = [
        (keys::IS_RETWEET, "Retweet"),
        (keys::IS_REPLY, "Reply"),
        (keys::IS_QUOTE, "Quote Tweet"),
    ]
    .into_iter()
    .filter(|(key, _)| props.get_bool(key) == Some(true))
    .map(|(_, label)| label)
    .collect();
    if !badges.is_empty() {
        out.push_str(&format!("**{}**\n\n", badges.join(", ")));
    }

    if let Some(username) = non_empty(block, keys::USERNAME) {
        match non_empty(block, keys::AUTHOR_NAME) {
            Some(author) => out.push_str(&format!("**{author}** (@{username})")),
            None => out.push_str(&format!("@{username}")),
        }
        if let Some(at) = props.get_time(keys::PUBLISHED_AT) {
            out.push_str(&format!(" • {}", format_rfc3339(&at)));
        }
        if let Some(source) = non_empty(block, keys::SOURCE) {
            out.push_str(&format!(" • via {source}"));
        }
        out.push_str("\n\n");
    }

    if let Some(text) = non_empty(block, keys::TITLE) {
        out.push_str(&text);
        out.push_str("\n\n");
    }

    let media = super::names(block, keys::MEDIA_URLS);
    if !media.is_empty() {
        out.push_str("**Media**:\n");
        for url in &media {
            out.push_str(&format!("![Media]({url})\n"));
        }
        out.push('\n');
    }

    let links = super::names(block, keys::EXTERNAL_URLS);
    if !links.is_empty() {
        out.push_str("**Links**:\n");
        for url in &links {
            out.push_str(&format!("- [{url}]({url})\n"));
        }
        out.push('\n');
    }

    let metrics: Vec<String> = [
        (keys::LIKE_COUNT, "❤️"),
        (keys::RETWEET_COUNT, "🔄"),
        (keys::COMMENT_COUNT, "💬"),
        (keys::QUOTE_COUNT, "🔁"),
    ]
    .into_iter()
    .filter_map(|(key, icon)| props.get_int(key).map(|n| format!("{icon} {n}")))
    .collect();
    if !metrics.is_empty() {
        out.push_str(&metrics.join(" "));
        out.push_str("\n\n");
    }

    if let Some(url) = non_empty(block, keys::URL) {
        out.push_str(&format!("[View on Twitter]({url})"));
    }

    out
}

pub fn tweet_property_keys() -> &'static [&'static str] {
    &[
        keys::TITLE,
        keys::URL,
        keys::DESCRIPTION,
        keys::IMAGE_URL,
        keys::TWEET_ID,
        keys::USERNAME,
        keys::AUTHOR_ID,
        keys::AUTHOR_NAME,
        keys::PUBLISHED_AT,
        keys::LIKE_COUNT,
        keys::RETWEET_COUNT,
        keys::COMMENT_COUNT,
        keys::QUOTE_COUNT,
        keys::CONVERSATION_ID,
        keys::LANGUAGE,
        keys::SOURCE,
        keys::HAS_MEDIA,
        keys::MEDIA_COUNT,
        keys::MEDIA_URLS,
        keys::MEDIA_INFO,
        keys::EXTERNAL_URLS,
        keys::IS_RETWEET,
        keys::IS_REPLY,
        keys::IS_QUOTE,
        keys::ENRICHED,
    ]
}
