//! Back-reference markers (`[[block:<uuid>]]`) embedded in free text.

use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use crate::defaults::{REFERENCE_PATTERN, REFERENCE_PREFIX, REFERENCE_SUFFIX};

static REFERENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(REFERENCE_PATTERN).expect("reference pattern compiles"));

/// Marker text for a block id.
pub fn annotation_for(id: &Uuid) -> String {
    format!("{}{}{}", REFERENCE_PREFIX, id.hyphenated(), REFERENCE_SUFFIX)
}

/// Block ids referenced in `text`, in order of appearance.
///
/// Only the canonical lowercase hyphenated form is recognised; anything
/// else is ignored.
pub fn extract_references(text: &str) -> Vec<Uuid> {
    REFERENCE_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| Uuid::parse_str(m.as_str()).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "550e8400-e29b-41d4-a716-446655440000";

    #[test]
    fn test_single_reference() {
        let text = format!("see [[block:{ID}]] for details");
        assert_eq!(extract_references(&text), vec![Uuid::parse_str(ID).unwrap()]);
    }

    #[test]
    fn test_references_in_order_with_duplicates() {
        let other = "6ba7b810-9dad-11d1-80b4-00c04fd430c8";
        let text = format!("[[block:{other}]] then [[block:{ID}]] and [[block:{other}]]");
        let refs = extract_references(&text);
        assert_eq!(refs.len(), 3);
        assert_eq!(refs[0].to_string(), other);
        assert_eq!(refs[1].to_string(), ID);
        assert_eq!(refs[2].to_string(), other);
    }

    #[test]
    fn test_malformed_markers_ignored() {
        let cases = [
            "[[block:550e8400-e29b-41d4-a716-44665544000]]",
            "[block:550e8400-e29b-41d4-a716-446655440000]",
            "[[block:550E8400-E29B-41D4-A716-446655440000]]",
            "[[block 550e8400-e29b-41d4-a716-446655440000]]",
            "[[block:550e8400e29b41d4a716446655440000]]",
        ];
        for text in cases {
            assert!(extract_references(text).is_empty(), "{text}");
        }
    }

    #[test]
    fn test_annotation_round_trip() {
        let id = Uuid::new_v4();
        let marker = annotation_for(&id);
        assert!(marker.starts_with("[[block:"));
        assert_eq!(extract_references(&marker), vec![id]);
    }
}
