//! Nested JSON projection of a block tree for downstream search and reranking.

use chrono::{DateTime, SecondsFormat, Utc};
use noteblocks_core::{Block, BlockLookup, ContentType};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::{debug, trace, warn};
use uuid::Uuid;

use crate::visit::Traversal;

const COMPONENT: &str = "json";

/// One node of the JSON projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedBlock {
    /// `[[block:<id>]]`.
    pub annotation_id: String,
    pub id: Uuid,
    /// Property document of the block, as stored.
    pub properties: JsonValue,
    pub content_type: ContentType,
    pub child_blocks: Vec<RenderedBlock>,
    pub keywords: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
    /// Reranker score, filled in downstream. Never serialized.
    #[serde(skip)]
    pub score: f64,
}

impl RenderedBlock {
    /// Total nodes in this subtree, including itself.
    pub fn node_count(&self) -> usize {
        1 + self.child_blocks.iter().map(RenderedBlock::node_count).sum::<usize>()
    }
}

fn timestamp(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Build the JSON projection of `block` and its reachable descendants.
///
/// Never fails: children missing from `lookup` are skipped, blocks already
/// projected in this call are not projected again, and a property store that
/// cannot be encoded is emitted as an empty object.
pub fn render_json<L>(block: &Block, lookup: &L) -> RenderedBlock
where
    L: BlockLookup + ?Sized,
{
    let mut traversal = Traversal::new();
    traversal.enter(block.id, COMPONENT);
    let rendered = project(block, lookup, &mut traversal);

    debug!(
        subsystem = "render",
        component = COMPONENT,
        op = "render_json",
        block_id = %block.id,
        node_count = traversal.node_count(),
        skipped_count = traversal.skipped,
        cut_count = traversal.cut,
        duration_ms = traversal.elapsed_ms(),
        "JSON render complete"
    );
    rendered
}

fn project<L>(block: &Block, lookup: &L, traversal: &mut Traversal) -> RenderedBlock
where
    L: BlockLookup + ?Sized,
{
    trace!(block_id = %block.id, block_kind = %block.kind, "Projecting block");

    let properties = serde_json::to_value(&block.properties).unwrap_or_else(|e| {
        warn!(
            subsystem = "render",
            component = COMPONENT,
            block_id = %block.id,
            error = %e,
            "Failed to encode properties, emitting empty object"
        );
        JsonValue::Object(Default::default())
    });

    let mut child_blocks = Vec::new();
    for child_id in &block.content {
        let Some(child) = lookup.lookup(child_id) else {
            traversal.skipped += 1;
            continue;
        };
        if !traversal.enter(child.id, COMPONENT) {
            continue;
        }
        child_blocks.push(project(child, lookup, traversal));
    }

    RenderedBlock {
        annotation_id: block.annotation_id(),
        id: block.id,
        properties,
        content_type: block.content_type(),
        child_blocks,
        keywords: block.keywords(),
        created_at: timestamp(&block.created_at),
        updated_at: timestamp(&block.updated_at),
        score: 0.0,
    }
}
