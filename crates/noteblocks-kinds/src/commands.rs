//! Operations behind the `noteblocks` command-line tool.
//!
//! Each command reads its inputs from disk and returns the text to print, so
//! the binary only handles argument parsing and logging setup.

use std::path::{Path, PathBuf};
use std::time::Instant;

use noteblocks_core::{
    extract_references, index_blocks, Block, Error as CoreError, RenderConfig,
};
use noteblocks_render::render_tree;
use serde_json::json;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::markdown::block_from_markdown;
use crate::registry::KindRenderer;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Root block {0} not found in input")]
    RootNotFound(Uuid),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type CommandResult<T> = Result<T, CommandError>;

fn read(path: &Path) -> CommandResult<String> {
    std::fs::read_to_string(path).map_err(|source| CommandError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a JSON array of blocks.
pub fn load_blocks(path: &Path) -> CommandResult<Vec<Block>> {
    let raw = read(path)?;
    let blocks: Vec<Block> = serde_json::from_str(&raw).map_err(CoreError::from)?;
    Ok(blocks)
}

/// Load a single JSON block.
pub fn load_block(path: &Path) -> CommandResult<Block> {
    let raw = read(path)?;
    let block: Block = serde_json::from_str(&raw).map_err(CoreError::from)?;
    Ok(block)
}

/// Render the tree rooted at `root` from the blocks in `input`.
pub fn render(input: &Path, root: Uuid, config: &RenderConfig) -> CommandResult<String> {
    config.validate().map_err(CoreError::from)?;

    let started = Instant::now();
    let lookup = index_blocks(load_blocks(input)?);
    let root_block = lookup.get(&root).ok_or(CommandError::RootNotFound(root))?;
    let output = render_tree(root_block, &lookup, &KindRenderer, config)?;

    info!(
        subsystem = "cli",
        op = "render",
        block_id = %root,
        format = %config.output,
        block_count = lookup.len(),
        duration_ms = started.elapsed().as_millis() as u64,
        "Rendered block tree"
    );
    Ok(output)
}

/// Parse one markdown line into a block and return it as pretty JSON.
pub fn parse(line: &str) -> CommandResult<String> {
    let block = block_from_markdown(line)?;
    Ok(serde_json::to_string_pretty(&block).map_err(CoreError::from)?)
}

/// Block ids referenced in the text file at `path`, one per line.
pub fn references(path: &Path) -> CommandResult<String> {
    let text = read(path)?;
    let ids = extract_references(&text);
    info!(
        subsystem = "cli",
        op = "references",
        reference_count = ids.len(),
        "Extracted references"
    );
    Ok(ids
        .iter()
        .map(Uuid::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Apply the patch at `patch` to the block at `block` and return the changed
/// field names with the merged block as pretty JSON.
pub fn merge(block: &Path, patch: &Path) -> CommandResult<String> {
    let mut target = load_block(block)?;
    let patch = read(patch)?;
    let changed = target.merge_from_document(patch.as_bytes())?;

    info!(
        subsystem = "cli",
        op = "merge",
        block_id = %target.id,
        changed_count = changed.len(),
        "Merged patch"
    );
    let output = json!({
        "changed": changed,
        "block": target,
    });
    Ok(serde_json::to_string_pretty(&output).map_err(CoreError::from)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_outputs_block_json() {
        let out = parse("## Plans").unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["type"], "heading_2");
        assert_eq!(value["properties"]["title"], json!(["Plans"]));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = references(Path::new("/nonexistent/notes.txt")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/notes.txt"));
    }
}
