//! Structured logging field name constants for noteblocks.
//!
//! All crates use these names for structured `tracing` fields so log
//! aggregation can query the same keys across the store, renderer and merger.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Operation aborted, caller must react |
//! | WARN  | Recoverable issue, best-effort fallback applied |
//! | INFO  | Lifecycle events (CLI startup), operation completions |
//! | DEBUG | Decision points: coercion failures, skipped merge fields, cycle cuts |
//! | TRACE | Per-node iteration during tree traversal |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "core", "render", "kinds", "cli"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "properties", "merge", "markdown", "json", "parser"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "append_value", "merge_from_document", "render_markdown"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Block UUID being operated on.
pub const BLOCK_ID: &str = "block_id";

/// Block kind wire name.
pub const BLOCK_KIND: &str = "block_kind";

/// Property key being read or written.
pub const PROPERTY_KEY: &str = "property_key";

/// External field name in a partial-update patch.
pub const FIELD: &str = "field";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of fields applied by a merge.
pub const CHANGED_COUNT: &str = "changed_count";

/// Number of nodes visited by a traversal.
pub const NODE_COUNT: &str = "node_count";

/// Number of entries skipped (unresolved children, undecodable fields).
pub const SKIPPED_COUNT: &str = "skipped_count";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
