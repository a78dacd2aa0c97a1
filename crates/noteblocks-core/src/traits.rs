//! Core traits for noteblocks abstractions.
//!
//! Tree traversal only ever sees blocks through these seams: ids resolve via
//! a [`BlockLookup`] and per-kind text comes from a [`PropertyRenderer`].

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use uuid::Uuid;

use crate::block::Block;
use crate::error::Result;

// =============================================================================
// BLOCK RESOLUTION
// =============================================================================

/// Resolves a block id to a block.
///
/// A missing id is not an error; traversals skip it.
pub trait BlockLookup {
    fn lookup(&self, id: &Uuid) -> Option<&Block>;
}

impl<S: BuildHasher> BlockLookup for HashMap<Uuid, Block, S> {
    fn lookup(&self, id: &Uuid) -> Option<&Block> {
        self.get(id)
    }
}

impl BlockLookup for BTreeMap<Uuid, Block> {
    fn lookup(&self, id: &Uuid) -> Option<&Block> {
        self.get(id)
    }
}

impl<L: BlockLookup + ?Sized> BlockLookup for &L {
    fn lookup(&self, id: &Uuid) -> Option<&Block> {
        (**self).lookup(id)
    }
}

/// Index a collection of blocks by id. Later duplicates win.
pub fn index_blocks(blocks: impl IntoIterator<Item = Block>) -> HashMap<Uuid, Block> {
    blocks.into_iter().map(|b| (b.id, b)).collect()
}

// =============================================================================
// PER-KIND RENDERING
// =============================================================================

/// Renders a single block's own properties to markdown, without children.
pub trait PropertyRenderer: Send + Sync {
    /// Markdown for `block`; the empty string when it has nothing to show.
    fn render_properties(&self, block: &Block) -> Result<String>;
}

impl<F> PropertyRenderer for F
where
    F: Fn(&Block) -> Result<String> + Send + Sync,
{
    fn render_properties(&self, block: &Block) -> Result<String> {
        self(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashmap_and_btreemap_lookup() {
        let block = Block::new();
        let id = block.id;

        let hashed = index_blocks(vec![block.clone()]);
        assert_eq!(hashed.lookup(&id).map(|b| b.id), Some(id));
        assert!(hashed.lookup(&Uuid::nil()).is_none());

        let ordered: BTreeMap<Uuid, Block> = [(id, block)].into_iter().collect();
        assert!(ordered.lookup(&id).is_some());
        assert!((&ordered).lookup(&id).is_some());
    }

    #[test]
    fn test_closure_renderer() {
        let renderer = |block: &Block| -> Result<String> { Ok(block.kind.to_string()) };
        assert_eq!(renderer.render_properties(&Block::new()).unwrap(), "fragment");
    }
}
