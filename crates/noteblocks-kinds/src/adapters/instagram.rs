//! Instagram posts.

use noteblocks_core::{keys, Block, Result};

use super::{non_empty, set_opt};
use crate::page::PageData;

#[derive(Debug, Clone, Default)]
pub struct InstagramFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Post permalink.
    pub url: Option<String>,
    pub enriched: bool,
}

pub fn add_instagram_properties(block: &mut Block, fields: InstagramFields) -> Result<()> {
    set_opt(block, keys::TITLE, fields.title)?;
    set_opt(block, keys::DESCRIPTION, fields.description)?;
    set_opt(block, keys::IMAGE_URL, fields.image_url)?;
    set_opt(block, keys::URL, fields.url)?;
    block.properties.replace_value(keys::ENRICHED, fields.enriched)
}

/// Store a scraped post page as an enriched Instagram block.
pub fn add_instagram_properties_from_page<P: PageData + ?Sized>(
    block: &mut Block,
    page: &P,
) -> Result<()> {
    add_instagram_properties(
        block,
        InstagramFields {
            title: Some(page.title().to_string()),
            description: Some(page.description().to_string()),
            image_url: Some(page.image().to_string()),
            url: Some(page.url().to_string()),
            enriched: true,
        },
    )
}

/// Title heading, linked image and caption, separated by blank lines.
pub fn render_instagram_properties(block: &Block) -> String {
    let url = non_empty(block, keys::URL);
    let mut parts = Vec::new();

    match (non_empty(block, keys::TITLE), &url) {
        (Some(title), Some(url)) => parts.push(format!("## [{title}]({url})")),
        (Some(title), None) => parts.push(format!("## {title}")),
        (None, Some(url)) => parts.push(format!("## [Instagram Post]({url})")),
        (None, None) => {}
    }

    if let Some(image) = non_empty(block, keys::IMAGE_URL) {
        match &url {
            Some(url) => parts.push(format!("[![Instagram Image]({image})]({url})")),
            None => parts.push(format!("![Instagram Image]({image})")),
        }
    }

    if let Some(caption) = non_empty(block, keys::DESCRIPTION) {
        parts.push(caption);
    }

    parts.join("\n\n")
}

pub fn instagram_property_keys() -> &'static [&'static str] {
    &[
        keys::TITLE,
        keys::DESCRIPTION,
        keys::IMAGE_URL,
        keys::URL,
        keys::ENRICHED,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Page;
    use noteblocks_core::BlockKind;

    #[test]
    fn test_full_post() {
        let mut block = Block::with_kind(BlockKind::Instagram);
        add_instagram_properties(
            &mut block,
            InstagramFields {
                title: Some("Sunset".to_string()),
                description: Some("Golden hour at the pier".to_string()),
                image_url: Some("https://img.example.com/1.jpg".to_string()),
                url: Some("https://instagram.com/p/abc".to_string()),
                enriched: true,
            },
        )
        .unwrap();

        assert_eq!(
            render_instagram_properties(&block),
            "## [Sunset](https://instagram.com/p/abc)\n\n\
             [![Instagram Image](https://img.example.com/1.jpg)](https://instagram.com/p/abc)\n\n\
             Golden hour at the pier"
        );
    }

    #[test]
    fn test_url_only() {
        let mut block = Block::with_kind(BlockKind::Instagram);
        add_instagram_properties(
            &mut block,
            InstagramFields {
                url: Some("https://instagram.com/p/xyz".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(
            render_instagram_properties(&block),
            "## [Instagram Post](https://instagram.com/p/xyz)"
        );
    }

    #[test]
    fn test_image_without_url() {
        let mut block = Block::with_kind(BlockKind::Instagram);
        block
            .properties
            .replace_value(keys::IMAGE_URL, "https://img.example.com/2.jpg")
            .unwrap();
        assert_eq!(
            render_instagram_properties(&block),
            "![Instagram Image](https://img.example.com/2.jpg)"
        );
    }

    #[test]
    fn test_from_page() {
        let page = Page {
            url: "https://instagram.com/p/def".to_string(),
            description: "Morning run".to_string(),
            ..Default::default()
        };
        let mut block = Block::with_kind(BlockKind::Instagram);
        add_instagram_properties_from_page(&mut block, &page).unwrap();

        assert_eq!(block.properties.get_string(keys::TITLE).as_deref(), Some(""));
        assert_eq!(block.properties.get_bool(keys::ENRICHED), Some(true));
        assert_eq!(
            render_instagram_properties(&block),
            "## [Instagram Post](https://instagram.com/p/def)\n\nMorning run"
        );
    }
}
