//! Wire types for the recommendation endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{RecommendError, Result};

/// Request body sent to the recommendation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendRequest {
    /// Movie title the user typed, already trimmed.
    pub movie: String,
}

impl RecommendRequest {
    /// Create a request for the given title.
    pub fn new(movie: impl Into<String>) -> Self {
        Self {
            movie: movie.into(),
        }
    }
}

/// A classified answer from the recommendation endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Recommendation text, split on newlines. Order is preserved.
    Response(Vec<String>),
    /// Application-level error reported by the backend.
    Error(String),
}

impl Reply {
    /// Classify a parsed response body.
    ///
    /// `response` wins over `error`. A field only counts when it is truthy:
    /// present, not `null`, not `false`, not `0` and not an empty string.
    /// A truthy `response` that is not a string cannot be split into lines
    /// and is rejected as invalid.
    pub fn from_body(body: &Value) -> Result<Self> {
        if let Some(response) = body.get("response").filter(|v| is_truthy(v)) {
            return match response {
                Value::String(text) => Ok(Self::Response(
                    text.split('\n').map(str::to_owned).collect(),
                )),
                _ => Err(RecommendError::InvalidResponse),
            };
        }

        if let Some(error) = body.get("error").filter(|v| is_truthy(v)) {
            let text = match error {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            return Ok(Self::Error(text));
        }

        Err(RecommendError::InvalidResponse)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
