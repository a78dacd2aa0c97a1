//! # noteblocks-core
//!
//! Core types for the noteblocks content-block model.
//!
//! This crate provides the typed property store, the [`Block`] entity and its
//! tree operations, the partial-update merger, and the traits the renderers
//! use to resolve and render blocks.

pub mod block;
pub mod config;
pub mod defaults;
pub mod error;
pub mod kind;
pub mod lifecycle;
pub mod logging;
pub mod merge;
pub mod moves;
pub mod origin;
pub mod properties;
pub mod references;
pub mod traits;

// Re-export commonly used types at crate root
pub use block::{debounce_key_for_editing, tag_parent, Block, Classification, LastError};
pub use config::{ConfigError, ConfigResult, OutputFormat, RenderConfig};
pub use error::{Error, Result};
pub use kind::{BlockKind, ContentType};
pub use lifecycle::LifecycleStatus;
pub use merge::merge_from_document;
pub use moves::{DestinationType, Move, MoveHistory, MoveReason};
pub use origin::Origin;
pub use properties::{keys, Properties, PropertyType, PropertyValue};
pub use references::{annotation_for, extract_references};
pub use traits::*;
