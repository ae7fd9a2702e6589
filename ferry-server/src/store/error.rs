//! Segment store error types.

use crate::domain::{DomainError, SegmentId};

/// Errors that can occur when reading segments from a store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading the segment file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Segment data was not valid JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A segment record failed validation
    #[error("invalid segment {id}: {source}")]
    InvalidSegment {
        id: SegmentId,
        #[source]
        source: DomainError,
    },

    /// HTTP request to the CMS failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The CMS rejected our credentials
    #[error("unauthorized: check FERRY_SEGMENTS_TOKEN")]
    Unauthorized,

    /// The CMS returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
}
