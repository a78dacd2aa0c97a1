//! # noteblocks-kinds
//!
//! Per-kind property adapters for noteblocks.
//!
//! Each supported kind knows how to write its fields into a block's property
//! store and how to render them back to markdown. [`KindRenderer`] plugs the
//! adapters into the tree renderers, and [`block_from_markdown`] builds a
//! block from a single markdown line. Scraped pages reach the adapters
//! through [`PageData`]. [`commands`] holds the operations behind the
//! `noteblocks` binary.

pub mod adapters;
pub mod commands;
pub mod markdown;
pub mod page;
pub mod registry;

pub use adapters::*;
pub use markdown::block_from_markdown;
pub use page::{Metadata, Page, PageData};
pub use registry::{property_keys_for, renderer_for, KindRenderer, RenderFn};
