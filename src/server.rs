use axum::{
    Form, Json, Router,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use tracing::info;

use crate::AppState;
use crate::chat::{ChatController, Message, Sender, Transcript};
use crate::config::AppConfig;
use crate::recommend::HttpRecommendClient;
use crate::ui::{self, bubble::REPLIES_ROUTE, page::MESSAGES_ROUTE};

/// Form posts are a single short title; anything bigger is not a chat message.
const BODY_LIMIT: usize = 64 * 1024;

/// Build shared state with an HTTP recommendation client from `config`.
pub fn build_state(config: Arc<AppConfig>) -> anyhow::Result<AppState> {
    let endpoint = config.backend.endpoint_url()?;
    let client = HttpRecommendClient::new(endpoint, config.backend.timeout())?;

    info!(
        name: "backend.config.loaded",
        endpoint = %client.endpoint(),
        timeout_secs = ?config.backend.timeout_secs,
        "Recommendation endpoint configured"
    );

    Ok(AppState {
        controller: Arc::new(ChatController::new(Arc::new(client))),
        config,
    })
}

/// Build the router for the chat page, its fragments and the JSON API.
pub fn build_router(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        // HTML pages
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        // Page fragments
        .route(MESSAGES_ROUTE, post(post_message))
        .route(REPLIES_ROUTE, post(post_reply))
        // JSON API
        .route("/api/chat", post(api_chat))
        // Static assets
        .nest_service("/static", static_dir)
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let state = build_state(Arc::clone(&config))?;
    let app = build_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Index page handler.
async fn index_handler() -> impl IntoResponse {
    Html(ui::html_shell("Chat", &ui::chat_page()))
}

async fn health_handler() -> &'static str {
    "ok"
}

// ─────────────────────────────────────────────────────────────────────────────
// Fragment Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Chat form body.
#[derive(Debug, Deserialize)]
struct MessageForm {
    #[serde(default)]
    message: String,
}

/// Pending reply slot body.
#[derive(Debug, Deserialize)]
struct ReplyForm {
    #[serde(default)]
    movie: String,
}

/// POST /chat/messages - Echo the user bubble and reserve a reply slot.
///
/// Blank input answers `204 No Content` so nothing is appended.
async fn post_message(State(state): State<AppState>, Form(form): Form<MessageForm>) -> Response {
    match state.controller.submit(&form.message) {
        Some(submission) => Html(format!(
            "{}{}",
            ui::render_message(&submission.message()),
            ui::render_pending_reply(&submission)
        ))
        .into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// POST /chat/replies - Fetch the recommendation and render the bot bubble.
async fn post_reply(State(state): State<AppState>, Form(form): Form<ReplyForm>) -> Response {
    let title = form.movie.trim();
    if title.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }

    let message = state.controller.reply(title).await;
    Html(ui::render_message(&message)).into_response()
}

// ─────────────────────────────────────────────────────────────────────────────
// API Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Request body for chat API.
#[derive(Debug, Deserialize)]
struct ChatRequest {
    /// Raw input, trimmed server side.
    message: String,
}

/// Message DTO for API responses.
#[derive(Debug, Serialize)]
struct MessageDto {
    sender: Sender,
    text: String,
}

impl From<Message> for MessageDto {
    fn from(message: Message) -> Self {
        Self {
            sender: message.sender(),
            text: message.text(),
        }
    }
}

/// Response from chat API.
#[derive(Debug, Serialize)]
struct ChatResponse {
    /// Messages rendered by this exchange, in order. Empty for blank input.
    messages: Vec<MessageDto>,
}

/// POST /api/chat - Run one send and return the rendered messages.
async fn api_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let mut transcript = Transcript::with_input(req.message);
    state.controller.send_message(&mut transcript).await;

    Json(ChatResponse {
        messages: transcript
            .into_messages()
            .into_iter()
            .map(MessageDto::from)
            .collect(),
    })
}
