//! Error types for noteblocks.

use thiserror::Error;
use uuid::Uuid;

use crate::kind::BlockKind;
use crate::properties::PropertyType;

/// Result type alias using noteblocks' Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for noteblocks operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or malformed required argument
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Child identifier not present in a block's content list
    #[error("Child not found: {0}")]
    ChildNotFound(Uuid),

    /// Anchor identifier for an insertion not present in a block's content list
    #[error("Reference element not found: {0}")]
    ReferenceNotFound(Uuid),

    /// Value cannot be converted to the type registered for a property key
    #[error("Cannot store {key} as {expected}: {reason}")]
    Coercion {
        key: String,
        expected: PropertyType,
        reason: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Block is owned by a different account
    #[error("Unauthorized block access: {0}")]
    Unauthorized(Uuid),

    /// Kind reassignment outside the fragment -> kind transition
    #[error("Invalid kind transition: {from} -> {to}")]
    InvalidKindTransition { from: BlockKind, to: BlockKind },

    /// A per-kind property renderer failed
    #[error("Render error for {kind}: {message}")]
    Render { kind: BlockKind, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
