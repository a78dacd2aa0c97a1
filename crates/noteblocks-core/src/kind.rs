//! Block kinds and their coarse content classification.

use serde::{Deserialize, Serialize};

/// Closed set of block kinds.
///
/// Blocks start as [`BlockKind::Fragment`] and are assigned a terminal kind
/// once, when their content is understood.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    #[default]
    Fragment,
    Page,
    Image,
    Video,
    Audio,
    File,
    Database,
    Link,
    ToDo,
    Email,
    Movie,
    Instagram,
    #[serde(rename = "youtube")]
    YouTube,
    Tweet,
    Series,
    Book,
    Line,
    Person,
    Place,
    Paragraph,
    #[serde(rename = "heading_1")]
    Heading1,
    #[serde(rename = "heading_2")]
    Heading2,
    #[serde(rename = "heading_3")]
    Heading3,
    #[serde(rename = "heading_4")]
    Heading4,
    #[serde(rename = "heading_5")]
    Heading5,
    #[serde(rename = "heading_6")]
    Heading6,
    BulletListItem,
    NumberedListItem,
}

impl BlockKind {
    pub const ALL: [BlockKind; 28] = [
        Self::Fragment,
        Self::Page,
        Self::Image,
        Self::Video,
        Self::Audio,
        Self::File,
        Self::Database,
        Self::Link,
        Self::ToDo,
        Self::Email,
        Self::Movie,
        Self::Instagram,
        Self::YouTube,
        Self::Tweet,
        Self::Series,
        Self::Book,
        Self::Line,
        Self::Person,
        Self::Place,
        Self::Paragraph,
        Self::Heading1,
        Self::Heading2,
        Self::Heading3,
        Self::Heading4,
        Self::Heading5,
        Self::Heading6,
        Self::BulletListItem,
        Self::NumberedListItem,
    ];

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fragment => "fragment",
            Self::Page => "page",
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::File => "file",
            Self::Database => "database",
            Self::Link => "link",
            Self::ToDo => "to_do",
            Self::Email => "email",
            Self::Movie => "movie",
            Self::Instagram => "instagram",
            Self::YouTube => "youtube",
            Self::Tweet => "tweet",
            Self::Series => "series",
            Self::Book => "book",
            Self::Line => "line",
            Self::Person => "person",
            Self::Place => "place",
            Self::Paragraph => "paragraph",
            Self::Heading1 => "heading_1",
            Self::Heading2 => "heading_2",
            Self::Heading3 => "heading_3",
            Self::Heading4 => "heading_4",
            Self::Heading5 => "heading_5",
            Self::Heading6 => "heading_6",
            Self::BulletListItem => "bullet_list_item",
            Self::NumberedListItem => "numbered_list_item",
        }
    }

    /// True if `s` names a kind.
    pub fn is_valid(s: &str) -> bool {
        s.parse::<BlockKind>().is_ok()
    }

    /// Every kind except the initial placeholder is terminal.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Fragment)
    }

    pub fn is_heading(&self) -> bool {
        self.heading_level().is_some()
    }

    /// Heading depth 1-6 for heading kinds.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            Self::Heading1 => Some(1),
            Self::Heading2 => Some(2),
            Self::Heading3 => Some(3),
            Self::Heading4 => Some(4),
            Self::Heading5 => Some(5),
            Self::Heading6 => Some(6),
            _ => None,
        }
    }

    /// Heading kind for a depth; `None` outside 1-6.
    pub fn heading(level: usize) -> Option<Self> {
        match level {
            1 => Some(Self::Heading1),
            2 => Some(Self::Heading2),
            3 => Some(Self::Heading3),
            4 => Some(Self::Heading4),
            5 => Some(Self::Heading5),
            6 => Some(Self::Heading6),
            _ => None,
        }
    }

    pub fn content_type(&self) -> ContentType {
        match self {
            Self::Movie
            | Self::Series
            | Self::Link
            | Self::ToDo
            | Self::Email
            | Self::YouTube
            | Self::Instagram
            | Self::Tweet => ContentType::Structural,
            _ => ContentType::Textual,
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BlockKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Invalid block kind: {}", s))
    }
}

/// Whether a block contributes inline text or a labelled section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Textual,
    Structural,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Textual => "textual",
            Self::Structural => "structural",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip() {
        for kind in BlockKind::ALL {
            assert_eq!(kind.as_str().parse::<BlockKind>().unwrap(), kind);
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            let back: BlockKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn test_is_valid() {
        assert!(BlockKind::is_valid("to_do"));
        assert!(BlockKind::is_valid("heading_3"));
        assert!(!BlockKind::is_valid("ToDo"));
        assert!(!BlockKind::is_valid("heading_7"));
        assert!(!BlockKind::is_valid(""));
    }

    #[test]
    fn test_terminal() {
        assert!(!BlockKind::Fragment.is_terminal());
        assert!(BlockKind::Paragraph.is_terminal());
        assert!(BlockKind::Movie.is_terminal());
    }

    #[test]
    fn test_content_type() {
        assert_eq!(BlockKind::Movie.content_type(), ContentType::Structural);
        assert_eq!(BlockKind::Tweet.content_type(), ContentType::Structural);
        assert_eq!(BlockKind::Paragraph.content_type(), ContentType::Textual);
        assert_eq!(BlockKind::Book.content_type(), ContentType::Textual);
        assert_eq!(ContentType::Structural.to_string(), "structural");
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(BlockKind::Heading4.heading_level(), Some(4));
        assert_eq!(BlockKind::heading(2), Some(BlockKind::Heading2));
        assert_eq!(BlockKind::heading(7), None);
        assert!(!BlockKind::Paragraph.is_heading());
    }

    #[test]
    fn test_default_is_fragment() {
        assert_eq!(BlockKind::default(), BlockKind::Fragment);
        assert_eq!(BlockKind::default().as_str(), crate::defaults::INITIAL_KIND);
    }
}
