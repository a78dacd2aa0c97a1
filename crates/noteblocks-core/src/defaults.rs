//! Centralized default constants for noteblocks.
//!
//! **This module is the single source of truth** for shared default values.
//! Crates reference these constants instead of defining their own magic
//! numbers or literal formats.

// =============================================================================
// BLOCK
// =============================================================================

/// Maximum number of move records retained per block (oldest evicted first).
pub const MAX_MOVES_HISTORY: usize = 20;

/// Kind wire name assigned to freshly constructed blocks.
pub const INITIAL_KIND: &str = "fragment";

// =============================================================================
// REFERENCES
// =============================================================================

/// Opening token of a back-reference marker: `[[block:<uuid>]]`.
pub const REFERENCE_PREFIX: &str = "[[block:";

/// Closing token of a back-reference marker.
pub const REFERENCE_SUFFIX: &str = "]]";

/// Pattern recognising a back-reference marker with a canonical lowercase UUID.
pub const REFERENCE_PATTERN: &str =
    r"\[\[block:([0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12})\]\]";

// =============================================================================
// EXTERNAL COORDINATION KEYS
// =============================================================================

/// Prefix of the per-block lock key held while enrichment runs.
pub const LOCK_ENRICHMENT_PREFIX: &str = "block_enrichment_";

/// Prefix of the per-block debounce key used by the edit path.
pub const DEBOUNCE_EDITING_PREFIX: &str = "block_editing_debounce_";

/// Prefix of the tag grouping children of a parent block.
pub const TAG_PARENT_PREFIX: &str = "parent_block_";

// =============================================================================
// TIMESTAMPS
// =============================================================================

/// Date-only layout accepted for timestamp properties (`2006-01-02`).
pub const DATE_LAYOUT: &str = "%Y-%m-%d";

/// Space-separated date-time layout accepted for timestamp properties.
pub const DATE_TIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Layout used when rendering due dates and reminders in markdown.
pub const DISPLAY_DATE_TIME_LAYOUT: &str = "%Y-%m-%d %H:%M";

/// Layout used when rendering birthdays in markdown.
pub const DISPLAY_LONG_DATE_LAYOUT: &str = "%B %-d, %Y";

// =============================================================================
// RENDERING
// =============================================================================

/// Separator placed between rendered markdown fragments of a tree.
pub const MARKDOWN_FRAGMENT_SEPARATOR: &str = "\n";
