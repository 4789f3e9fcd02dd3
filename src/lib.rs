//! Movie Chat
//!
//! A chat-style front end for a movie recommendation endpoint. The user types
//! a title, sees it echoed as a bubble, and gets the backend's suggestions
//! (or its error) back as a bot bubble.
//!
//! # Architecture
//!
//! - **Server**: Axum serving an HTML-first page that appends server-rendered fragments
//! - **Controller**: the send flow behind a [`chat::ChatView`] seam
//! - **Client**: one JSON POST per submission to the recommendation endpoint
//!
//! # Modules
//!
//! - [`chat`]: messages, views and the chat controller
//! - [`recommend`]: recommendation endpoint client and reply classification
//! - [`ui`]: page shell and message bubble rendering
//! - [`server`]: router and HTTP handlers
//! - [`terminal`]: line-oriented chat on stdin/stdout
//! - [`config`]: layered configuration
//! - [`telemetry`]: tracing setup

#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod chat;
pub mod config;
pub mod recommend;
pub mod server;
pub mod telemetry;
pub mod terminal;
pub mod ui;

use std::sync::Arc;

use crate::chat::ChatController;
use crate::config::AppConfig;

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Chat controller bound to the recommendation endpoint.
    pub controller: Arc<ChatController>,
    /// Global Configuration
    pub config: Arc<AppConfig>,
}
