//! Text kinds: paragraph, page, headings and list items.
//!
//! All of them keep their text under the `title` key.

use noteblocks_core::{keys, Block, Result};

use super::non_empty;

pub fn add_paragraph_properties(block: &mut Block, title: &str) -> Result<()> {
    block.properties.replace_value(keys::TITLE, title)
}

pub fn render_paragraph_properties(block: &Block) -> String {
    non_empty(block, keys::TITLE).unwrap_or_default()
}

pub fn add_page_properties(block: &mut Block, title: &str) -> Result<()> {
    block.properties.replace_value(keys::TITLE, title)
}

pub fn render_page_properties(block: &Block) -> String {
    non_empty(block, keys::TITLE).unwrap_or_default()
}

pub fn add_heading_properties(block: &mut Block, title: &str) -> Result<()> {
    block.properties.replace_value(keys::TITLE, title)
}

/// `#` repeated by the heading level, then the title.
///
/// A heading without a title renders as the empty string so it leaves no
/// stray marker in the output. Non-heading kinds get the bare title.
pub fn render_heading_properties(block: &Block) -> String {
    let Some(title) = non_empty(block, keys::TITLE) else {
        return String::new();
    };
    match block.kind.heading_level() {
        Some(level) => format!("{} {}", "#".repeat(level as usize), title),
        None => title,
    }
}

pub fn add_bullet_list_item_properties(block: &mut Block, title: &str) -> Result<()> {
    block.properties.replace_value(keys::TITLE, title)
}

pub fn render_bullet_list_item_properties(block: &Block) -> String {
    non_empty(block, keys::TITLE).unwrap_or_default()
}

pub fn add_numbered_list_item_properties(block: &mut Block, title: &str) -> Result<()> {
    block.properties.replace_value(keys::TITLE, title)
}

pub fn render_numbered_list_item_properties(block: &Block) -> String {
    non_empty(block, keys::TITLE).unwrap_or_default()
}

pub fn text_property_keys() -> &'static [&'static str] {
    &[keys::TITLE]
}

#[cfg(test)]
mod tests {
    use super::*;
    use noteblocks_core::BlockKind;

    #[test]
    fn test_paragraph_renders_title() {
        let mut block = Block::with_kind(BlockKind::Paragraph);
        add_paragraph_properties(&mut block, "Plain words").unwrap();
        assert_eq!(render_paragraph_properties(&block), "Plain words");
    }

    #[test]
    fn test_heading_prefix_per_level() {
        for level in 1..=6 {
            let mut block = Block::with_kind(BlockKind::heading(level).unwrap());
            add_heading_properties(&mut block, "Section").unwrap();
            assert_eq!(
                render_heading_properties(&block),
                format!("{} Section", "#".repeat(level))
            );
        }
    }

    #[test]
    fn test_heading_without_title_is_empty() {
        let block = Block::with_kind(BlockKind::Heading2);
        assert_eq!(render_heading_properties(&block), "");
    }

    #[test]
    fn test_list_items_render_bare_title() {
        let mut bullet = Block::with_kind(BlockKind::BulletListItem);
        add_bullet_list_item_properties(&mut bullet, "milk").unwrap();
        assert_eq!(render_bullet_list_item_properties(&bullet), "milk");

        let mut numbered = Block::with_kind(BlockKind::NumberedListItem);
        add_numbered_list_item_properties(&mut numbered, "eggs").unwrap();
        assert_eq!(render_numbered_list_item_properties(&numbered), "eggs");
    }

    #[test]
    fn test_page_without_title_is_empty() {
        assert_eq!(render_page_properties(&Block::with_kind(BlockKind::Page)), "");
    }
}
