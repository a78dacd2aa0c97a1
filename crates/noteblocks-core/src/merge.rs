//! Partial-update merge of a JSON patch into a live [`Block`].
//!
//! A patch is a flat JSON object keyed by the block's external field names.
//! Each recognised field is decoded on its own; a value that does not decode
//! or decodes to the field's zero value is treated as not provided. Only
//! values that differ from the current state are applied and reported.
//! `updated_at` is never read from a patch; it is stamped whenever anything
//! else changed.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use tracing::{debug, trace};
use uuid::Uuid;

use crate::block::{Block, LastError};
use crate::error::{Error, Result};
use crate::origin::Origin;

/// External name of the last-modified field.
pub const UPDATED_AT: &str = "updated_at";

/// Unix seconds of `0001-01-01T00:00:00Z`, the zero time of the stored
/// document format.
const ZERO_TIME_SECONDS: i64 = -62_135_596_800;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Undecodable,
    Zero,
    Unchanged,
    Applied,
}

struct Field {
    name: &'static str,
    apply: fn(&mut Block, JsonValue) -> Outcome,
}

/// Recognised fields in declaration order.
static FIELDS: &[Field] = &[
    Field { name: "id", apply: |b, v| merge(&mut b.id, v, Uuid::is_nil) },
    Field { name: "type", apply: |b, v| merge(&mut b.kind, v, never_zero) },
    Field { name: "original_space_id", apply: |b, v| merge(&mut b.original_space_id, v, Uuid::is_nil) },
    Field { name: "root_parent_id", apply: |b, v| merge(&mut b.root_parent_id, v, Option::is_none) },
    Field { name: "parent_id", apply: |b, v| merge(&mut b.parent_id, v, Option::is_none) },
    Field { name: "account_id", apply: |b, v| merge(&mut b.account_id, v, Uuid::is_nil) },
    Field { name: "space_id", apply: |b, v| merge(&mut b.space_id, v, Uuid::is_nil) },
    Field { name: "previous_space_id", apply: |b, v| merge(&mut b.previous_space_id, v, Uuid::is_nil) },
    Field { name: "creator_user_id", apply: |b, v| merge(&mut b.creator_user_id, v, Uuid::is_nil) },
    Field { name: "properties", apply: |b, v| merge(&mut b.properties, v, never_zero) },
    Field { name: "styles", apply: |b, v| merge(&mut b.styles, v, never_zero) },
    Field { name: "content", apply: |b, v| merge(&mut b.content, v, never_zero) },
    Field { name: "children_recursive", apply: |b, v| merge(&mut b.children_recursive, v, never_zero) },
    Field { name: "raw_body", apply: |b, v| merge(&mut b.raw_body, v, String::is_empty) },
    Field { name: "lifecycle_status", apply: |b, v| merge_lifecycle_status(b, v) },
    Field { name: "metadata", apply: |b, v| merge(&mut b.metadata, v, Option::is_none) },
    Field { name: "origin", apply: |b, v| merge(&mut b.origin, v, Origin::is_unset) },
    Field { name: "moves_history", apply: |b, v| merge(&mut b.moves_history, v, never_zero) },
    Field { name: "last_error", apply: |b, v| merge(&mut b.last_error, v, LastError::is_empty) },
    Field { name: "last_viewed_at", apply: |b, v| merge(&mut b.last_viewed_at, v, Option::is_none) },
    Field { name: "created_at", apply: |b, v| merge(&mut b.created_at, v, is_zero_time) },
    Field { name: "meaning", apply: |b, v| merge(&mut b.meaning, v, String::is_empty) },
    Field { name: "classification", apply: |b, v| merge(&mut b.classification, v, never_zero) },
    Field { name: "calculated_content", apply: |b, v| merge(&mut b.calculated_content, v, String::is_empty) },
    Field { name: "dense_vector", apply: |b, v| merge(&mut b.dense_vector, v, never_zero) },
];

/// Decode `raw` into the slot's type and apply it when it is non-zero and
/// different from the current value. JSON `null` is always a zero value.
fn merge<T>(slot: &mut T, raw: JsonValue, is_zero: fn(&T) -> bool) -> Outcome
where
    T: DeserializeOwned + PartialEq,
{
    if raw.is_null() {
        return Outcome::Zero;
    }
    let value: T = match serde_json::from_value(raw) {
        Ok(value) => value,
        Err(_) => return Outcome::Undecodable,
    };
    if is_zero(&value) {
        return Outcome::Zero;
    }
    if *slot == value {
        return Outcome::Unchanged;
    }
    *slot = value;
    Outcome::Applied
}

/// Lifecycle statuses arrive as strings; `""` means not provided.
fn merge_lifecycle_status(block: &mut Block, raw: JsonValue) -> Outcome {
    match raw.as_str() {
        Some("") => Outcome::Zero,
        Some(s) => match s.parse() {
            Ok(status) => merge_value(&mut block.lifecycle_status, Some(status)),
            Err(_) => Outcome::Undecodable,
        },
        None if raw.is_null() => Outcome::Zero,
        None => Outcome::Undecodable,
    }
}

fn merge_value<T: PartialEq>(slot: &mut T, value: T) -> Outcome {
    if *slot == value {
        Outcome::Unchanged
    } else {
        *slot = value;
        Outcome::Applied
    }
}

fn never_zero<T>(_: &T) -> bool {
    false
}

fn is_zero_time(t: &DateTime<Utc>) -> bool {
    t.timestamp() == ZERO_TIME_SECONDS && t.timestamp_subsec_nanos() == 0
}

/// Apply a partial JSON document to `block`.
///
/// Returns the external names of the fields that changed, in declaration
/// order, followed by `updated_at` when the list is non-empty. A patch that
/// is not a JSON object is rejected before anything is applied.
pub fn merge_from_document(block: &mut Block, patch: impl AsRef<[u8]>) -> Result<Vec<&'static str>> {
    let start = Instant::now();
    let envelope: JsonValue = serde_json::from_slice(patch.as_ref())?;
    let JsonValue::Object(mut fields) = envelope else {
        return Err(Error::Serialization(
            "partial update must be a JSON object".to_string(),
        ));
    };
    fields.remove(UPDATED_AT);

    let mut changed = Vec::new();
    let mut skipped = 0usize;
    for field in FIELDS {
        let Some(raw) = fields.remove(field.name) else {
            continue;
        };
        match (field.apply)(block, raw) {
            Outcome::Applied => {
                trace!(field = field.name, "Field applied");
                changed.push(field.name);
            }
            Outcome::Undecodable => {
                skipped += 1;
                debug!(
                    subsystem = "core",
                    component = "merge",
                    block_id = %block.id,
                    field = field.name,
                    "Skipping undecodable field"
                );
            }
            Outcome::Zero | Outcome::Unchanged => {}
        }
    }

    if !changed.is_empty() {
        block.updated_at = Utc::now();
        changed.push(UPDATED_AT);
    }

    debug!(
        subsystem = "core",
        component = "merge",
        op = "merge_from_document",
        block_id = %block.id,
        changed_count = changed.len(),
        skipped_count = skipped,
        ignored_count = fields.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Partial update merged"
    );
    Ok(changed)
}

impl Block {
    /// See [`merge_from_document`].
    pub fn merge_from_document(&mut self, patch: impl AsRef<[u8]>) -> Result<Vec<&'static str>> {
        merge_from_document(self, patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::BlockKind;
    use crate::lifecycle::LifecycleStatus;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixture() -> Block {
        let mut block = Block::with_kind(BlockKind::Paragraph);
        block.updated_at = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        block.raw_body = "<p>hi</p>".to_string();
        block
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let mut block = fixture();
        let before = block.updated_at;
        let changed = merge_from_document(&mut block, "{}").unwrap();
        assert!(changed.is_empty());
        assert_eq!(block.updated_at, before);
    }

    #[test]
    fn test_equal_value_not_reported() {
        let mut block = fixture();
        let before = block.updated_at;
        let changed = block.merge_from_document(r#"{"raw_body": "<p>hi</p>"}"#).unwrap();
        assert!(changed.is_empty());
        assert_eq!(block.updated_at, before);
    }

    #[test]
    fn test_changed_field_stamps_updated_at() {
        let mut block = fixture();
        let before = block.updated_at;
        let changed = block.merge_from_document(r#"{"raw_body": "<p>bye</p>"}"#).unwrap();
        assert_eq!(changed, vec!["raw_body", "updated_at"]);
        assert_eq!(block.raw_body, "<p>bye</p>");
        assert!(block.updated_at > before);
    }

    #[test]
    fn test_updated_at_never_read() {
        let mut block = fixture();
        let before = block.updated_at;
        let changed = block
            .merge_from_document(r#"{"updated_at": "2030-01-01T00:00:00Z"}"#)
            .unwrap();
        assert!(changed.is_empty());
        assert_eq!(block.updated_at, before);
    }

    #[test]
    fn test_zero_values_are_not_provided() {
        let mut block = fixture();
        block.space_id = Uuid::new_v4();
        let space = block.space_id;
        let patch = json!({
            "raw_body": "",
            "space_id": Uuid::nil(),
            "parent_id": null,
            "created_at": "0001-01-01T00:00:00Z",
            "origin": {"connector_slug": "", "connector_uniq_source_identifier": ""},
            "last_error": {"message": ""},
            "metadata": null,
            "lifecycle_status": ""
        });
        let changed = block.merge_from_document(patch.to_string()).unwrap();
        assert!(changed.is_empty());
        assert_eq!(block.raw_body, "<p>hi</p>");
        assert_eq!(block.space_id, space);
    }

    #[test]
    fn test_undecodable_field_skipped_others_applied() {
        let mut block = fixture();
        let changed = block
            .merge_from_document(r#"{"space_id": "not-a-uuid", "meaning": "trip notes", "content": 7}"#)
            .unwrap();
        assert_eq!(changed, vec!["meaning", "updated_at"]);
        assert_eq!(block.meaning, "trip notes");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let mut block = fixture();
        let changed = block.merge_from_document(r#"{"colour": "red"}"#).unwrap();
        assert!(changed.is_empty());
    }

    #[test]
    fn test_non_object_envelope_rejected() {
        let mut block = fixture();
        let original = block.clone();
        assert!(matches!(
            block.merge_from_document("[1, 2]"),
            Err(Error::Serialization(_))
        ));
        assert!(matches!(
            block.merge_from_document("{broken"),
            Err(Error::Serialization(_))
        ));
        assert_eq!(block, original);
    }

    #[test]
    fn test_changes_reported_in_declaration_order() {
        let mut block = fixture();
        let parent = Uuid::new_v4();
        let patch = json!({
            "meaning": "m",
            "lifecycle_status": "edited",
            "parent_id": parent,
            "type": "heading_2",
            "properties": {"text": ["Title"]}
        });
        let changed = block.merge_from_document(patch.to_string()).unwrap();
        assert_eq!(
            changed,
            vec!["type", "parent_id", "properties", "lifecycle_status", "meaning", "updated_at"]
        );
        assert_eq!(block.kind, BlockKind::Heading2);
        assert_eq!(block.parent_id, Some(parent));
        assert_eq!(block.lifecycle_status, Some(LifecycleStatus::Edited));
        assert_eq!(block.properties.get_string("text").as_deref(), Some("Title"));
    }

    #[test]
    fn test_explicit_empty_containers_apply() {
        let mut block = fixture();
        block.content = vec![Uuid::new_v4()];
        let changed = block.merge_from_document(r#"{"content": []}"#).unwrap();
        assert_eq!(changed, vec!["content", "updated_at"]);
        assert!(block.content.is_empty());
    }

    #[test]
    fn test_properties_replaced_wholesale() {
        let mut block = fixture();
        block.properties.replace_value("text", "old").unwrap();
        block.properties.replace_value("title", "kept?").unwrap();
        block
            .merge_from_document(r#"{"properties": {"text": ["new"]}}"#)
            .unwrap();
        assert_eq!(block.properties.get_string("text").as_deref(), Some("new"));
        assert!(!block.properties.has("title"));
    }

    #[test]
    fn test_zero_time_detection() {
        assert!(is_zero_time(&Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0).unwrap()));
        assert!(!is_zero_time(&DateTime::<Utc>::default()));
        assert!(!is_zero_time(&Utc::now()));
    }

    #[test]
    fn test_epoch_created_at_applies() {
        let mut block = fixture();
        block.created_at = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let changed =
            merge_from_document(&mut block, r#"{"created_at":"1970-01-01T00:00:00Z"}"#).unwrap();
        assert_eq!(changed, vec!["created_at", UPDATED_AT]);
        assert_eq!(block.created_at, DateTime::<Utc>::default());
    }
}
