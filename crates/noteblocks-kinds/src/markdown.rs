//! Single-line markdown to block conversion.

use noteblocks_core::{Block, BlockKind, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::adapters::{
    add_bullet_list_item_properties, add_heading_properties, add_link_properties,
    add_numbered_list_item_properties, add_paragraph_properties, LinkFields,
};

/// `[text](url)` spanning the whole line.
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[(.*?)\]\((.*?)\)$").expect("link pattern is valid"));

/// A bare URL spanning the whole line.
static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(https?|ftp)://\S+$").expect("url pattern is valid"));

/// Heading markers, deepest first so `## ` is not read as `# `.
const HEADING_MARKERS: [(&str, usize); 6] = [
    ("###### ", 6),
    ("##### ", 5),
    ("#### ", 4),
    ("### ", 3),
    ("## ", 2),
    ("# ", 1),
];

/// Build a new block from one line of markdown.
///
/// The input is trimmed, then matched in order: empty → paragraph, whole-line
/// `[text](url)` → link, whole-line `http(s)://` or `ftp://` URL → link (the
/// URL doubles as the title), `# `…`###### ` → heading, `- ` or `* ` →
/// bullet item, digits followed by `. ` → numbered item, anything else →
/// paragraph. Links created here are not enriched.
pub fn block_from_markdown(markdown: &str) -> Result<Block> {
    let line = markdown.trim();
    let mut block = Block::new();

    let kind = if line.is_empty() {
        block.assign_kind(BlockKind::Paragraph)?;
        add_paragraph_properties(&mut block, "")?;
        BlockKind::Paragraph
    } else if let Some(caps) = LINK_RE.captures(line) {
        block.assign_kind(BlockKind::Link)?;
        add_link_properties(
            &mut block,
            LinkFields {
                url: Some(caps[2].to_string()),
                title: Some(caps[1].to_string()),
                ..Default::default()
            },
        )?;
        BlockKind::Link
    } else if URL_RE.is_match(line) {
        block.assign_kind(BlockKind::Link)?;
        add_link_properties(
            &mut block,
            LinkFields {
                url: Some(line.to_string()),
                title: Some(line.to_string()),
                ..Default::default()
            },
        )?;
        BlockKind::Link
    } else if let Some((level, content)) = heading(line) {
        let kind = BlockKind::heading(level).unwrap_or(BlockKind::Heading1);
        block.assign_kind(kind)?;
        add_heading_properties(&mut block, content)?;
        kind
    } else if let Some(content) = line
        .strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
    {
        block.assign_kind(BlockKind::BulletListItem)?;
        add_bullet_list_item_properties(&mut block, content)?;
        BlockKind::BulletListItem
    } else if let Some(content) = numbered_item(line) {
        block.assign_kind(BlockKind::NumberedListItem)?;
        add_numbered_list_item_properties(&mut block, content)?;
        BlockKind::NumberedListItem
    } else {
        block.assign_kind(BlockKind::Paragraph)?;
        add_paragraph_properties(&mut block, line)?;
        BlockKind::Paragraph
    };

    debug!(
        subsystem = "kinds",
        component = "parser",
        op = "block_from_markdown",
        block_id = %block.id,
        block_kind = %kind,
        "Parsed markdown line"
    );
    Ok(block)
}

fn heading(line: &str) -> Option<(usize, &str)> {
    HEADING_MARKERS
        .iter()
        .find_map(|(marker, level)| line.strip_prefix(marker).map(|rest| (*level, rest)))
}

/// Text after `N. ` when the line starts with one or more digits, a dot and
/// a space.
fn numbered_item(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix(". ")
}
