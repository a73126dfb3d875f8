//! Error types for xmlout

use thiserror::Error;

/// Errors raised at the ingestion boundary.
///
/// Serialization itself is total and has no error path; only parsing the
/// input document and checking the document-root precondition can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// The input was not valid JSON
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    /// A complete document needs a mapping at the top level to derive
    /// element names from
    #[error("json root must be an object")]
    NonObjectRoot,
}

/// Result type alias for xmlout
pub type Result<T> = std::result::Result<T, Error>;
