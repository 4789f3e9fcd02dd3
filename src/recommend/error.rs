//! Error types for recommendation requests.

use thiserror::Error;

/// Failure while obtaining a recommendation.
///
/// All variants collapse into the same user-facing fallback message; the
/// distinction only matters for operator logs.
#[derive(Error, Debug)]
pub enum RecommendError {
    /// The request never produced a response body (refused, DNS, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not JSON.
    #[error("malformed response body: {0}")]
    Protocol(#[from] serde_json::Error),

    /// The JSON body carried neither a usable `response` nor an `error` field.
    #[error("received an invalid response from the server")]
    InvalidResponse,
}

/// Result type alias for recommendation calls.
pub type Result<T> = std::result::Result<T, RecommendError>;
