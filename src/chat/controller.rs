//! Send flow: trim, echo, request, classify, render.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{error, info};

use super::message::Message;
use super::view::ChatView;
use crate::recommend::{RecommendClient, Reply};

/// Bot text shown for transport, protocol and invalid-response failures.
pub const FALLBACK_MESSAGE: &str =
    "Sorry, something went wrong. Please check the server connection and try again.";

/// An accepted user submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Monotonically increasing per controller, starting at 1.
    pub seq: u64,
    /// Trimmed movie title.
    pub title: String,
}

impl Submission {
    /// The `user` bubble echoing this submission.
    pub fn message(&self) -> Message {
        Message::user(self.title.clone())
    }
}

/// Drives one chat surface against a recommendation source.
///
/// Each send is independent. The only state kept here is the submission
/// counter used to correlate a reply with the slot reserved for it.
pub struct ChatController {
    client: Arc<dyn RecommendClient>,
    next_seq: AtomicU64,
}

impl fmt::Debug for ChatController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatController")
            .field("next_seq", &self.next_seq)
            .finish_non_exhaustive()
    }
}

impl ChatController {
    pub fn new(client: Arc<dyn RecommendClient>) -> Self {
        Self {
            client,
            next_seq: AtomicU64::new(1),
        }
    }

    /// Accept raw input, or `None` when it is empty after trimming.
    pub fn submit(&self, raw: &str) -> Option<Submission> {
        let title = raw.trim();
        if title.is_empty() {
            return None;
        }

        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        info!(name: "chat.submitted", seq, movie = %title, "Movie title submitted");

        Some(Submission {
            seq,
            title: title.to_string(),
        })
    }

    /// Ask the backend about `title` and turn the outcome into a bot message.
    ///
    /// Never fails: every failure becomes [`FALLBACK_MESSAGE`] and is logged.
    pub async fn reply(&self, title: &str) -> Message {
        match self.client.recommend(title).await {
            Ok(Reply::Response(lines)) => Message::bot_lines(lines),
            Ok(Reply::Error(reason)) => Message::bot(format!("Error: {reason}")),
            Err(err) => {
                error!(
                    name: "chat.reply.failed",
                    movie = %title,
                    error = %err,
                    "Error fetching recommendation"
                );
                Message::bot(FALLBACK_MESSAGE)
            }
        }
    }

    /// Full send on `view`: read and trim the input, echo it, clear the
    /// input, then render the backend's answer.
    ///
    /// Returns the submission sequence number, or `None` when the input was
    /// blank and nothing happened. The exclusive borrow of `view` keeps at
    /// most one send in flight per view.
    pub async fn send_message<V>(&self, view: &mut V) -> Option<u64>
    where
        V: ChatView + ?Sized,
    {
        let submission = self.submit(&view.input_value())?;

        view.render_message(submission.message());
        view.clear_input();

        let reply = self.reply(&submission.title).await;
        view.render_message(reply);

        Some(submission.seq)
    }
}
