//! # noteblocks-render
//!
//! Renderers that walk a block tree through a caller-supplied
//! [`BlockLookup`] and produce markdown or a nested JSON projection.
//!
//! Both traversals keep a visited set per call, so cyclic or shared `content`
//! lists always terminate and each block appears at most once in the output.

pub mod json;
pub mod markdown;
mod visit;

pub use json::{render_json, RenderedBlock};
pub use markdown::render_markdown;

use noteblocks_core::{Block, BlockLookup, OutputFormat, PropertyRenderer, RenderConfig, Result};

/// Render `block` in the format selected by `config`.
pub fn render_tree<L, R>(block: &Block, lookup: &L, renderer: &R, config: &RenderConfig) -> Result<String>
where
    L: BlockLookup + ?Sized,
    R: PropertyRenderer + ?Sized,
{
    match config.output {
        OutputFormat::Markdown => render_markdown(block, lookup, renderer),
        OutputFormat::Json => {
            let rendered = render_json(block, lookup);
            if config.pretty {
                Ok(serde_json::to_string_pretty(&rendered)?)
            } else {
                Ok(serde_json::to_string(&rendered)?)
            }
        }
    }
}
