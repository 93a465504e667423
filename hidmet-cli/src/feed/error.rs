//! Feed client error types.

/// Errors from retrieving or decoding the bulletin.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status code
    #[error("feed returned status {status}")]
    Status { status: u16 },

    /// Body was not a decodable RSS document
    #[error("feed parse error: {message}")]
    Parse { message: String },
}
