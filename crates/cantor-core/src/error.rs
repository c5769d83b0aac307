//! Error types for Cantor core.

use thiserror::Error;

/// Errors raised when a raw value falls outside a closed vocabulary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Part name not in the liturgical part vocabulary.
    #[error("unknown part: {0}")]
    UnknownPart(String),

    /// Priority not in the priority enum.
    #[error("unknown priority: {0}")]
    UnknownPriority(String),

    /// Table kind not recognised.
    #[error("unknown table kind: {0}")]
    UnknownKind(String),
}

/// Result type alias using Cantor's core Error.
pub type Result<T> = std::result::Result<T, Error>;
