//! Books.

use chrono::{DateTime, Datelike, Utc};
use noteblocks_core::{keys, Block, Result};

use super::{non_empty, set_list, set_opt};

/// Fields written by [`add_book_properties`].
///
/// List fields replace every stored entry when given.
#[derive(Debug, Clone, Default)]
pub struct BookFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub url: Option<String>,
    pub isbn: Option<String>,
    pub authors: Option<Vec<String>>,
    pub publisher: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub page_count: Option<i64>,
    pub genres: Option<Vec<String>>,
    pub language: Option<String>,
    pub tagline: Option<String>,
    pub price: Option<f64>,
    pub author_bio: Option<String>,
    pub table_of_contents: Option<String>,
    pub reviews: Option<Vec<String>>,
    pub enriched: bool,
}

pub fn add_book_properties(block: &mut Block, fields: BookFields) -> Result<()> {
    set_opt(block, keys::TITLE, fields.title)?;
    set_opt(block, keys::DESCRIPTION, fields.description)?;
    set_opt(block, keys::IMAGE_URL, fields.image_url)?;
    set_opt(block, keys::URL, fields.url)?;
    set_opt(block, keys::ISBN, fields.isbn)?;
    if let Some(authors) = fields.authors {
        set_list(block, keys::AUTHOR_NAME, &authors)?;
    }
    set_opt(block, keys::PUBLISHER, fields.publisher)?;
    set_opt(block, keys::PUBLISHED_AT, fields.published_at)?;
    set_opt(block, keys::PAGE_COUNT, fields.page_count)?;
    if let Some(genres) = fields.genres {
        set_list(block, keys::GENRES, &genres)?;
    }
    set_opt(block, keys::LANGUAGE, fields.language)?;
    set_opt(block, keys::TAGLINE, fields.tagline)?;
    set_opt(block, keys::PRICE, fields.price)?;
    set_opt(block, keys::AUTHOR_BIO, fields.author_bio)?;
    set_opt(block, keys::TABLE_OF_CONTENTS, fields.table_of_contents)?;
    if let Some(reviews) = fields.reviews {
        set_list(block, keys::REVIEWS, &reviews)?;
    }
    block.properties.replace_value(keys::ENRICHED, fields.enriched)
}

pub fn render_book_properties(block: &Block) -> String {
    let props = &block.properties;
    let mut out = String::new();

    if let Some(title) = props.get_string(keys::TITLE) {
        out.push_str(&format!("# {title}"));
        if let Some(published) = props.get_time(keys::PUBLISHED_AT) {
            out.push_str(&format!(" ({})", published.year()));
        }
        out.push('\n');
    }

    if let Some(tagline) = non_empty(block, keys::TAGLINE) {
        out.push_str(&format!("*{tagline}*\n"));
    }

    let authors = props.get_string_array(keys::AUTHOR_NAME).unwrap_or_default();
    if !authors.is_empty() {
        out.push_str(&format!("**Authors:** {}\n", authors.join(", ")));
    }

    let mut details = Vec::new();
    if let Some(isbn) = props.get_string(keys::ISBN) {
        details.push(format!("**ISBN:** {isbn}"));
    }
    if let Some(publisher) = props.get_string(keys::PUBLISHER) {
        details.push(format!("**Publisher:** {publisher}"));
    }
    if let Some(language) = props.get_string(keys::LANGUAGE) {
        details.push(format!("**Language:** {language}"));
    }
    if let Some(pages) = props.get_int(keys::PAGE_COUNT) {
        details.push(format!("**Pages:** {pages}"));
    }
    if let Some(price) = props.get_float(keys::PRICE) {
        details.push(format!("**Price:** ${price:.2}"));
    }
    if !details.is_empty() {
        out.push_str(&details.join(" | "));
        out.push('\n');
    }

    let genres = props.get_string_array(keys::GENRES).unwrap_or_default();
    if !genres.is_empty() {
        out.push_str(&format!("**Genres:** {}\n", genres.join(", ")));
    }

    if let Some(description) = non_empty(block, keys::DESCRIPTION) {
        out.push_str(&format!("---\n{description}\n"));
    }
    if let Some(bio) = non_empty(block, keys::AUTHOR_BIO) {
        out.push_str(&format!("\n**Author Bio:**\n{bio}\n"));
    }
    if let Some(toc) = non_empty(block, keys::TABLE_OF_CONTENTS) {
        out.push_str(&format!("\n**Table of Contents:**\n{toc}\n"));
    }

    let reviews = props.get_string_array(keys::REVIEWS).unwrap_or_default();
    if !reviews.is_empty() {
        out.push_str("\n**Reviews:**\n");
        for review in reviews {
            out.push_str(&format!("- {review}\n"));
        }
    }

    out
}

pub fn book_property_keys() -> &'static [&'static str] {
    &[
        keys::TITLE,
        keys::DESCRIPTION,
        keys::IMAGE_URL,
        keys::URL,
        keys::ISBN,
        keys::AUTHOR_NAME,
        keys::PUBLISHER,
        keys::PUBLISHED_AT,
        keys::PAGE_COUNT,
        keys::GENRES,
        keys::LANGUAGE,
        keys::TAGLINE,
        keys::PRICE,
        keys::AUTHOR_BIO,
        keys::TABLE_OF_CONTENTS,
        keys::REVIEWS,
        keys::ENRICHED,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use noteblocks_core::BlockKind;

    fn strings(items: &[&str]) -> Option<Vec<String>> {
        Some(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_full_render() {
        let mut block = Block::with_kind(BlockKind::Book);
        add_book_properties(
            &mut block,
            BookFields {
                title: Some("The Rust Programming Language".to_string()),
                published_at: Some(Utc.with_ymd_and_hms(2019, 8, 12, 0, 0, 0).unwrap()),
                authors: strings(&["Steve Klabnik", "Carol Nichols"]),
                isbn: Some("978-1718500440".to_string()),
                publisher: Some("No Starch Press".to_string()),
                page_count: Some(560),
                price: Some(39.95),
                genres: strings(&["Programming"]),
                description: Some("The official book.".to_string()),
                reviews: strings(&["Thorough", "Approachable"]),
                enriched: true,
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(
            render_book_properties(&block),
            "# The Rust Programming Language (2019)\n\
             **Authors:** Steve Klabnik, Carol Nichols\n\
             **ISBN:** 978-1718500440 | **Publisher:** No Starch Press | **Pages:** 560 | **Price:** $39.95\n\
             **Genres:** Programming\n\
             ---\n\
             The official book.\n\
             \n\
             **Reviews:**\n\
             - Thorough\n\
             - Approachable\n"
        );
    }

    #[test]
    fn test_lists_replace_previous_entries() {
        let mut block = Block::with_kind(BlockKind::Book);
        add_book_properties(
            &mut block,
            BookFields {
                authors: strings(&["First"]),
                ..Default::default()
            },
        )
        .unwrap();
        add_book_properties(
            &mut block,
            BookFields {
                authors: strings(&["Second", "Third"]),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(
            block.properties.get_string_array(keys::AUTHOR_NAME).unwrap(),
            vec!["Second", "Third"]
        );
    }

    #[test]
    fn test_empty_book_renders_nothing() {
        assert_eq!(render_book_properties(&Block::with_kind(BlockKind::Book)), "");
    }
}
