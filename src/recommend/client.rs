//! HTTP client for the recommendation endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use super::error::Result;
use super::types::{RecommendRequest, Reply};

/// Source of movie recommendations.
///
/// Implementations perform exactly one request per call and never retry.
#[async_trait]
pub trait RecommendClient: Send + Sync {
    /// Ask for recommendations similar to `movie`.
    async fn recommend(&self, movie: &str) -> Result<Reply>;
}

/// `reqwest`-backed [`RecommendClient`] posting JSON to a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpRecommendClient {
    endpoint: Url,
    http: reqwest::Client,
}

impl HttpRecommendClient {
    /// Create a client for `endpoint`.
    ///
    /// Without a `timeout` the request waits as long as the transport does.
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            endpoint,
            http: builder.build()?,
        })
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl RecommendClient for HttpRecommendClient {
    async fn recommend(&self, movie: &str) -> Result<Reply> {
        debug!(
            name: "recommend.request",
            endpoint = %self.endpoint,
            movie = %movie,
            "Requesting recommendations"
        );

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&RecommendRequest::new(movie))
            .send()
            .await?;

        // Status is informational only: a 4xx/5xx carrying a JSON `error`
        // field renders the same way as a 200 carrying one.
        let status = response.status();
        if !status.is_success() {
            warn!(
                name: "recommend.status",
                status = status.as_u16(),
                "Recommendation endpoint returned a non-success status"
            );
        }

        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;
        Reply::from_body(&body)
    }
}
