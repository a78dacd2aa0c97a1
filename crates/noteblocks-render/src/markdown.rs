//! Markdown rendering of a block tree.

use noteblocks_core::defaults::MARKDOWN_FRAGMENT_SEPARATOR;
use noteblocks_core::{Block, BlockLookup, PropertyRenderer, Result};
use tracing::{debug, trace};

use crate::visit::Traversal;

const COMPONENT: &str = "markdown";

/// Render `block` and its reachable descendants as markdown.
///
/// Depth-first pre-order: a block's own properties first, then each child in
/// `content` order. Children missing from `lookup` are skipped, blocks
/// already rendered in this call are not rendered again, and blocks with no
/// text leave no blank line. The first renderer failure aborts the render.
pub fn render_markdown<L, R>(block: &Block, lookup: &L, renderer: &R) -> Result<String>
where
    L: BlockLookup + ?Sized,
    R: PropertyRenderer + ?Sized,
{
    let mut traversal = Traversal::new();
    let mut fragments = Vec::new();

    traversal.enter(block.id, COMPONENT);
    collect(block, lookup, renderer, &mut traversal, &mut fragments)?;

    debug!(
        subsystem = "render",
        component = COMPONENT,
        op = "render_markdown",
        block_id = %block.id,
        node_count = traversal.node_count(),
        skipped_count = traversal.skipped,
        cut_count = traversal.cut,
        duration_ms = traversal.elapsed_ms(),
        "Markdown render complete"
    );
    Ok(fragments.join(MARKDOWN_FRAGMENT_SEPARATOR))
}

fn collect<L, R>(
    block: &Block,
    lookup: &L,
    renderer: &R,
    traversal: &mut Traversal,
    fragments: &mut Vec<String>,
) -> Result<()>
where
    L: BlockLookup + ?Sized,
    R: PropertyRenderer + ?Sized,
{
    trace!(block_id = %block.id, block_kind = %block.kind, "Rendering block");

    let own = renderer.render_properties(block)?;
    if !own.is_empty() {
        fragments.push(own);
    }

    for child_id in &block.content {
        let Some(child) = lookup.lookup(child_id) else {
            traversal.skipped += 1;
            trace!(block_id = %child_id, "Child not in lookup, skipping");
            continue;
        };
        if !traversal.enter(child.id, COMPONENT) {
            continue;
        }
        collect(child, lookup, renderer, traversal, fragments)?;
    }
    Ok(())
}
