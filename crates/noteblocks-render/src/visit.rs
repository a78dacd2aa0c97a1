//! Per-traversal bookkeeping shared by the renderers.

use std::collections::HashSet;
use std::time::Instant;

use tracing::debug;
use uuid::Uuid;

/// Visited set and counters for one top-level render call.
///
/// `content` is a plain id list with no acyclicity guarantee, so every walk
/// checks here before descending. A node already entered contributes
/// nothing the second time, whether it closes a cycle or is shared by two
/// parents.
pub(crate) struct Traversal {
    visited: HashSet<Uuid>,
    started: Instant,
    pub(crate) skipped: usize,
    pub(crate) cut: usize,
}

impl Traversal {
    pub(crate) fn new() -> Self {
        Self {
            visited: HashSet::new(),
            started: Instant::now(),
            skipped: 0,
            cut: 0,
        }
    }

    /// Mark `id` as entered. Returns false when it was already entered.
    pub(crate) fn enter(&mut self, id: Uuid, component: &'static str) -> bool {
        if self.visited.insert(id) {
            return true;
        }
        self.cut += 1;
        debug!(
            subsystem = "render",
            component,
            block_id = %id,
            "Block already visited, not descending"
        );
        false
    }

    pub(crate) fn node_count(&self) -> usize {
        self.visited.len()
    }

    pub(crate) fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}
