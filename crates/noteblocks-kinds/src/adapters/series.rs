//! TV series, rendered as a watch-list entry.

use noteblocks_core::{keys, Block, Result};

use super::{names, non_empty, set_opt};
use crate::page::{Metadata, PageData};

/// Fields written by [`add_series_properties`].
#[derive(Debug, Clone, Default)]
pub struct SeriesFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub url: Option<String>,
    pub imdb_id: Option<String>,
    pub tmdb_id: Option<String>,
    pub first_air_year: Option<i64>,
    pub last_air_year: Option<i64>,
    pub number_of_seasons: Option<i64>,
    pub number_of_episodes: Option<i64>,
    pub rating: Option<f64>,
    /// Airing status, e.g. `Returning Series` or `Ended`.
    pub status: Option<String>,
    /// Series format, e.g. `Scripted` or `Miniseries`.
    pub series_type: Option<String>,
    pub in_production: Option<bool>,
    /// Empty lists are not stored.
    pub genres: Vec<String>,
    pub creators: Vec<String>,
    pub cast: Vec<String>,
    pub networks: Vec<String>,
    /// Watched. Stored as `false` when not given.
    pub checked: Option<bool>,
    pub enriched: bool,
}

pub fn add_series_properties(block: &mut Block, fields: SeriesFields) -> Result<()> {
    set_opt(block, keys::TITLE, fields.title)?;
    set_opt(block, keys::DESCRIPTION, fields.description)?;
    set_opt(block, keys::IMAGE_URL, fields.image_url)?;
    set_opt(block, keys::URL, fields.url)?;
    set_opt(block, keys::IMDB_ID, fields.imdb_id)?;
    set_opt(block, keys::TMDB_ID, fields.tmdb_id)?;
    set_opt(block, keys::FIRST_AIR_YEAR, fields.first_air_year)?;
    set_opt(block, keys::LAST_AIR_YEAR, fields.last_air_year)?;
    set_opt(block, keys::RATING, fields.rating)?;
    set_opt(block, keys::STATUS, fields.status)?;
    set_opt(block, keys::IN_PRODUCTION, fields.in_production)?;
    set_opt(block, keys::NUMBER_OF_SEASONS, fields.number_of_seasons)?;
    set_opt(block, keys::NUMBER_OF_EPISODES, fields.number_of_episodes)?;
    set_opt(block, keys::TYPE, fields.series_type)?;
    block
        .properties
        .replace_value(keys::CHECKED, fields.checked.unwrap_or(false))?;

    for (key, values) in [
        (keys::GENRES, fields.genres),
        (keys::CREATORS, fields.creators),
        (keys::CAST, fields.cast),
        (keys::NETWORKS, fields.networks),
    ] {
        if !values.is_empty() {
            block.properties.replace_value(key, values)?;
        }
    }

    block.properties.replace_value(keys::ENRICHED, fields.enriched)
}

/// Store a scraped series page as an enriched series.
///
/// Custom metadata uses the property key names; list fields are
/// `", "`-separated and `in_production`/`checked` are `"true"` or not.
pub fn add_series_properties_from_page<P: PageData + ?Sized>(
    block: &mut Block,
    page: &P,
) -> Result<()> {
    let meta = Metadata::of(page);
    add_series_properties(
        block,
        SeriesFields {
            title: Some(page.title().to_string()),
            description: Some(page.description().to_string()),
            image_url: Some(page.image().to_string()),
            url: Some(page.url().to_string()),
            imdb_id: meta.string("imdb_id"),
            tmdb_id: meta.string("tmdb_id"),
            first_air_year: meta.int("first_air_year"),
            last_air_year: meta.int("last_air_year"),
            number_of_seasons: meta.int("number_of_seasons"),
            number_of_episodes: meta.int("number_of_episodes"),
            rating: meta.float("rating"),
            status: meta.string("status"),
            series_type: meta.string("type"),
            in_production: meta.flag("in_production"),
            genres: meta.list("genres").unwrap_or_default(),
            creators: meta.list("creators").unwrap_or_default(),
            cast: meta.list("cast").unwrap_or_default(),
            networks: meta.list("networks").unwrap_or_default(),
            checked: meta.flag("checked"),
            enriched: true,
        },
    )
}

fn positive_int(block: &Block, key: &str) -> Option<i64> {
    block.properties.get_int(key).filter(|n| *n > 0)
}

pub fn render_series_properties(block: &Block) -> String {
    let mut parts = Vec::new();

    let prefix = match block.properties.get_bool(keys::CHECKED) {
        Some(true) => "- [x] ",
        Some(false) => "- [ ] ",
        None => "",
    };

    if let Some(title) = non_empty(block, keys::TITLE) {
        let first = positive_int(block, keys::FIRST_AIR_YEAR);
        let last = positive_int(block, keys::LAST_AIR_YEAR);
        let title = match (first, last) {
            (Some(first), Some(last)) if last != first => format!("{title} ({first}-{last})"),
            (Some(first), _) => format!("{title} ({first})"),
            (None, _) => title,
        };
        match non_empty(block, keys::URL) {
            Some(url) => parts.push(format!("{prefix}## [{title}]({url})")),
            None => parts.push(format!("{prefix}## {title}")),
        }
    }

    if let Some(status) = non_empty(block, keys::STATUS) {
        parts.push(format!("**Status:** {status}"));
    }

    let mut stats = Vec::new();
    if let Some(rating) = block.properties.get_float(keys::RATING).filter(|r| *r > 0.0) {
        stats.push(format!("Rating: ⭐ {rating:.1}"));
    }
    let seasons = positive_int(block, keys::NUMBER_OF_SEASONS)
        .map(|n| format!("{n} Season{}", if n == 1 { "" } else { "s" }));
    let episodes = positive_int(block, keys::NUMBER_OF_EPISODES).map(|n| format!("{n} Episodes"));
    match (seasons, episodes) {
        (Some(seasons), Some(episodes)) => stats.push(format!("{seasons}, {episodes}")),
        (Some(one), None) | (None, Some(one)) => stats.push(one),
        (None, None) => {}
    }
    if !stats.is_empty() {
        parts.push(format!("**{}**", stats.join(" | ")));
    }

    for (label, key) in [
        ("Networks", keys::NETWORKS),
        ("Genres", keys::GENRES),
        ("Creators", keys::CREATORS),
        ("Cast", keys::CAST),
    ] {
        let values = names(block, key);
        if !values.is_empty() {
            parts.push(format!("**{label}:** {}", values.join(", ")));
        }
    }

    if let Some(description) = non_empty(block, keys::DESCRIPTION) {
        parts.push(format!("\n{description}"));
    }

    parts.join("\n")
}

pub fn series_property_keys() -> &'static [&'static str] {
    &[
        keys::TITLE,
        keys::DESCRIPTION,
        keys::IMAGE_URL,
        keys::URL,
        keys::IMDB_ID,
        keys::TMDB_ID,
        keys::FIRST_AIR_YEAR,
        keys::LAST_AIR_YEAR,
        keys::RATING,
        keys::STATUS,
        keys::IN_PRODUCTION,
        keys::NUMBER_OF_SEASONS,
        keys::NUMBER_OF_EPISODES,
        keys::GENRES,
        keys::CREATORS,
        keys::CAST,
        keys::NETWORKS,
        keys::TYPE,
        keys::ENRICHED,
        keys::CHECKED,
    ]
}
