//! Error types for extraction operations.

/// Error type for extraction operations.
///
/// Errors are produced only at the API boundaries (construction, the
/// extraction entry point, and the URL fetch). Per-element failures inside
/// the pipeline degrade to absent fields instead of propagating.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The URL passed to the fetch entry point could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The fetched response body was not valid UTF-8.
    #[error("decoding failed: {0}")]
    DecodingFailed(String),

    /// The HTML could not be parsed, or no article candidate survived scoring.
    #[error("parsing failed: {0}")]
    ParsingFailed(String),

    /// Transport or other unclassified failure.
    #[error("extraction failed: {0}")]
    Unknown(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
