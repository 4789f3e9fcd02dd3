//! Recommendation endpoint client.
//!
//! The recommendation backend is an external collaborator exposing a single
//! route: it takes `{"movie": "..."}` and answers with either
//! `{"response": "..."}` or `{"error": "..."}`. Everything else is treated
//! as an invalid response.
//!
//! # Architecture
//!
//! - [`RecommendClient`]: async seam the chat controller talks to
//! - [`HttpRecommendClient`]: `reqwest` implementation of that seam
//! - [`Reply`]: classified backend answer
//! - [`RecommendError`]: transport, protocol and semantic failures

mod client;
mod error;
mod types;

pub use client::{HttpRecommendClient, RecommendClient};
pub use error::{RecommendError, Result};
pub use types::{RecommendRequest, Reply};
