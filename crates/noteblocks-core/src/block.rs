//! The block entity: a node in a note's content tree.
//!
//! Blocks hold child *identifiers*, never references. Resolving a child
//! always goes through a caller-supplied lookup, so graph walks must guard
//! against cycles themselves.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;
use tracing::debug;
use uuid::Uuid;

use crate::defaults::{DEBOUNCE_EDITING_PREFIX, LOCK_ENRICHMENT_PREFIX, TAG_PARENT_PREFIX};
use crate::error::{Error, Result};
use crate::kind::{BlockKind, ContentType};
use crate::lifecycle::LifecycleStatus;
use crate::moves::{Move, MoveHistory};
use crate::origin::Origin;
use crate::properties::Properties;
use crate::references::annotation_for;

/// Label → confidence.
pub type Classification = BTreeMap<String, f64>;

/// Last processing failure recorded on a block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastError {
    #[serde(default)]
    pub message: String,
}

impl LastError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Block {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: BlockKind,
    pub original_space_id: Uuid,
    pub root_parent_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
    pub account_id: Uuid,
    pub space_id: Uuid,
    pub previous_space_id: Uuid,
    pub creator_user_id: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub properties: Properties,
    /// Presentation-only attributes, same encoding as `properties`.
    #[serde(deserialize_with = "null_as_default")]
    pub styles: Properties,
    /// Direct children, in display order.
    #[serde(deserialize_with = "null_as_default")]
    pub content: Vec<Uuid>,
    /// Flattened descendants, maintained by the caller.
    #[serde(deserialize_with = "null_as_default")]
    pub children_recursive: Vec<Uuid>,
    /// Source markup (html, email body, ...).
    pub raw_body: String,
    #[serde(deserialize_with = "empty_as_none")]
    pub lifecycle_status: Option<LifecycleStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonValue>,
    pub origin: Origin,
    pub moves_history: MoveHistory,
    pub last_error: LastError,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_viewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Short description of what the block is about; set on root blocks.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub meaning: String,
    #[serde(
        skip_serializing_if = "BTreeMap::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub classification: Classification,
    /// Flattened text used for embeddings. Derived; may be recomputed.
    pub calculated_content: String,
    #[serde(deserialize_with = "null_as_default")]
    pub dense_vector: Vec<f32>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<LifecycleStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

impl Block {
    /// Fresh fragment block with a new id and empty stores.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            kind: BlockKind::Fragment,
            created_at: now,
            updated_at: now,
            ..Default::default()
        }
    }

    /// Fresh block already assigned `kind`.
    pub fn with_kind(kind: BlockKind) -> Self {
        Self {
            kind,
            ..Self::new()
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn content_type(&self) -> ContentType {
        self.kind.content_type()
    }

    // =========================================================================
    // CHILDREN
    // =========================================================================

    /// Push `id` onto the end of `content`. Duplicates are not checked.
    pub fn append_child(&mut self, id: Uuid) {
        self.content.push(id);
    }

    /// Remove the first occurrence of `id`.
    pub fn remove_child(&mut self, id: Uuid) -> Result<()> {
        let position = self
            .content
            .iter()
            .position(|child| *child == id)
            .ok_or(Error::ChildNotFound(id))?;
        self.content.remove(position);
        Ok(())
    }

    /// Insert `id` immediately after the first occurrence of `after`.
    pub fn insert_child(&mut self, id: Uuid, after: Uuid) -> Result<()> {
        let position = self
            .content
            .iter()
            .position(|child| *child == after)
            .ok_or(Error::ReferenceNotFound(after))?;
        self.content.insert(position + 1, id);
        Ok(())
    }

    /// The first `n` children, or all of them when there are fewer.
    pub fn first_n_content(&self, n: usize) -> &[Uuid] {
        &self.content[..n.min(self.content.len())]
    }

    /// No children and no property value other than null or `""`.
    ///
    /// Any other value, including `false` and `0`, makes the block non-empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && self.properties.values().all(|v| v.is_blank())
    }

    // =========================================================================
    // HISTORY
    // =========================================================================

    pub fn add_move(&mut self, record: Move) {
        self.moves_history.push(record);
    }

    /// Deduplicated space and reasoning keywords across the move history, sorted.
    pub fn keywords(&self) -> Vec<String> {
        self.moves_history
            .iter()
            .flat_map(|m| m.space_keywords.iter().chain(&m.reasoning_keywords))
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    // =========================================================================
    // IDENTITY AND OWNERSHIP
    // =========================================================================

    /// `[[block:<id>]]`.
    pub fn annotation_id(&self) -> String {
        annotation_for(&self.id)
    }

    pub fn check_permissions(&self, account_id: Uuid) -> Result<()> {
        if self.account_id != account_id {
            debug!(
                subsystem = "core",
                component = "block",
                op = "check_permissions",
                block_id = %self.id,
                "Account does not own block"
            );
            return Err(Error::Unauthorized(self.id));
        }
        Ok(())
    }

    /// Move the block out of `fragment` into its terminal kind.
    ///
    /// Re-assigning the current kind is a no-op; any other change is rejected.
    pub fn assign_kind(&mut self, kind: BlockKind) -> Result<()> {
        if self.kind == kind {
            return Ok(());
        }
        if self.kind.is_terminal() || !kind.is_terminal() {
            return Err(Error::InvalidKindTransition {
                from: self.kind,
                to: kind,
            });
        }
        debug!(
            subsystem = "core",
            component = "block",
            op = "assign_kind",
            block_id = %self.id,
            block_kind = %kind,
            "Block kind assigned"
        );
        self.kind = kind;
        Ok(())
    }

    // =========================================================================
    // COORDINATION KEYS
    // =========================================================================

    /// Key of the lock held while the block is being enriched.
    pub fn lock_key_for_enrichment(&self) -> String {
        format!("{}{}", LOCK_ENRICHMENT_PREFIX, self.id)
    }

    pub fn debounce_key_for_editing(&self) -> String {
        debounce_key_for_editing(self.id)
    }
}

/// Debounce key for edits to `block_id`.
pub fn debounce_key_for_editing(block_id: Uuid) -> String {
    format!("{}{}", DEBOUNCE_EDITING_PREFIX, block_id)
}

/// Tag grouping the children of `block_id`.
pub fn tag_parent(block_id: Uuid) -> String {
    format!("{}{}", TAG_PARENT_PREFIX, block_id)
}
