//! Movies, rendered as a watch-list entry.

use noteblocks_core::{keys, Block, Result};

use super::{names, non_empty, set_opt};
use crate::page::{Metadata, PageData};

/// Fields written by [`add_movie_properties`].
#[derive(Debug, Clone, Default)]
pub struct MovieFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub url: Option<String>,
    pub imdb_id: Option<String>,
    pub tmdb_id: Option<String>,
    pub release_year: Option<i64>,
    pub rating: Option<f64>,
    /// Minutes.
    pub runtime: Option<i64>,
    pub tagline: Option<String>,
    pub budget: Option<i64>,
    pub revenue: Option<i64>,
    /// Empty lists are not stored.
    pub genres: Vec<String>,
    pub directors: Vec<String>,
    pub cast: Vec<String>,
    /// Watched. Stored as `false` when not given.
    pub checked: Option<bool>,
    pub enriched: bool,
}

pub fn add_movie_properties(block: &mut Block, fields: MovieFields) -> Result<()> {
    set_opt(block, keys::TITLE, fields.title)?;
    set_opt(block, keys::DESCRIPTION, fields.description)?;
    set_opt(block, keys::IMAGE_URL, fields.image_url)?;
    set_opt(block, keys::URL, fields.url)?;
    set_opt(block, keys::IMDB_ID, fields.imdb_id)?;
    set_opt(block, keys::TMDB_ID, fields.tmdb_id)?;
    set_opt(block, keys::RELEASE_YEAR, fields.release_year)?;
    set_opt(block, keys::RATING, fields.rating)?;
    set_opt(block, keys::RUNTIME, fields.runtime)?;
    set_opt(block, keys::TAGLINE, fields.tagline)?;
    set_opt(block, keys::BUDGET, fields.budget)?;
    set_opt(block, keys::REVENUE, fields.revenue)?;
    block
        .properties
        .replace_value(keys::CHECKED, fields.checked.unwrap_or(false))?;

    for (key, values) in [
        (keys::GENRES, fields.genres),
        (keys::DIRECTORS, fields.directors),
        (keys::CAST, fields.cast),
    ] {
        if !values.is_empty() {
            block.properties.replace_value(key, values)?;
        }
    }

    block.properties.replace_value(keys::ENRICHED, fields.enriched)
}

/// Store a scraped movie page as an enriched movie.
///
/// Custom metadata supplies `imdb_id`, `tmdb_id`, `release_year`, `rating`,
/// `runtime`, `tagline`, `budget`, `revenue`, the `", "`-separated `genres`,
/// `directors` and `cast` lists, and `checked`.
pub fn add_movie_properties_from_page<P: PageData + ?Sized>(
    block: &mut Block,
    page: &P,
) -> Result<()> {
    let meta = Metadata::of(page);
    add_movie_properties(
        block,
        MovieFields {
            title: Some(page.title().to_string()),
            description: Some(page.description().to_string()),
            image_url: Some(page.image().to_string()),
            url: Some(page.url().to_string()),
            imdb_id: meta.string("imdb_id"),
            tmdb_id: meta.string("tmdb_id"),
            release_year: meta.int("release_year"),
            rating: meta.float("rating"),
            runtime: meta.int("runtime"),
            tagline: meta.string("tagline"),
            budget: meta.int("budget"),
            revenue: meta.int("revenue"),
            genres: meta.list("genres").unwrap_or_default(),
            directors: meta.list("directors").unwrap_or_default(),
            cast: meta.list("cast").unwrap_or_default(),
            checked: meta.flag("checked"),
            enriched: true,
        },
    )
}

pub fn render_movie_properties(block: &Block) -> String {
    let mut parts = Vec::new();

    let prefix = match block.properties.get_bool(keys::CHECKED) {
        Some(true) => "- [x] ",
        Some(false) => "- [ ] ",
        None => "",
    };

    if let Some(title) = non_empty(block, keys::TITLE) {
        let title = match block.properties.get_int(keys::RELEASE_YEAR).filter(|y| *y > 0) {
            Some(year) => format!("{title} ({year})"),
            None => title,
        };
        match non_empty(block, keys::URL) {
            Some(url) => parts.push(format!("{prefix}# [{title}]({url})")),
            None => parts.push(format!("{prefix}# {title}")),
        }
    }

    if let Some(tagline) = non_empty(block, keys::TAGLINE) {
        parts.push(format!("*{tagline}*"));
    }

    let mut stats = Vec::new();
    if let Some(rating) = block.properties.get_float(keys::RATING).filter(|r| *r > 0.0) {
        stats.push(format!("Rating: ⭐ {rating:.1}"));
    }
    if let Some(runtime) = block.properties.get_int(keys::RUNTIME).filter(|r| *r > 0) {
        stats.push(format!("Runtime: {runtime} min"));
    }
    if !stats.is_empty() {
        parts.push(format!("**{}**", stats.join(" | ")));
    }

    for (label, key) in [
        ("Genres", keys::GENRES),
        ("Directors", keys::DIRECTORS),
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

pub fn movie_property_keys() -> &'static [&'static str] {
    &[
        keys::TITLE,
        keys::DESCRIPTION,
        keys::IMAGE_URL,
        keys::URL,
        keys::IMDB_ID,
        keys::TMDB_ID,
        keys::RELEASE_YEAR,
        keys::RATING,
        keys::RUNTIME,
        keys::GENRES,
        keys::DIRECTORS,
        keys::CAST,
        keys::TAGLINE,
        keys::BUDGET,
        keys::REVENUE,
        keys::ENRICHED,
        keys::CHECKED,
    ]
}
