//! Typed errors for the KML extractor.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers that want
//! to tell a bad document apart from a traversal failure can match on it.

use thiserror::Error;

/// Errors that can occur while extracting placemarks.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Markup is not valid XML
    #[error("error parsing KML at byte {position}: {reason}")]
    Parse { position: u64, reason: String },

    /// Any other failure while walking the document
    #[error("unexpected error while reading KML: {0}")]
    Unexpected(String),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExtractError {
    /// Build a parse error at the given reader position.
    pub fn parse(position: u64, reason: impl Into<String>) -> Self {
        Self::Parse {
            position,
            reason: reason.into(),
        }
    }

    /// Returns true if the document itself was not well-formed.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;
