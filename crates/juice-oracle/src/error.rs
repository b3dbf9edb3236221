//! Error types for the oracle engine.
//!
//! Oracle resolution itself never fails: bad settings fall back to defaults
//! and malformed state is clamped. Errors only surface when decoding stored
//! records or parsing dice expressions.

use thiserror::Error;

/// Result type for oracle operations.
pub type OracleResult<T> = Result<T, OracleError>;

/// Errors that can occur in the oracle engine.
#[derive(Debug, Error)]
pub enum OracleError {
    /// A stored record names a result kind this engine does not know.
    #[error("unknown result kind: {0}")]
    UnknownKind(String),

    /// A stored record's metadata does not match its kind.
    #[error("malformed record metadata for {kind}: {source}")]
    MalformedRecord {
        /// The kind named by the record.
        kind: String,
        /// The underlying decoding error.
        source: serde_json::Error,
    },

    /// JSON encoding or decoding failed.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    /// A dice expression could not be parsed.
    #[error("invalid dice expression: {0}")]
    Dice(#[from] juice_dice::DiceError),
}
