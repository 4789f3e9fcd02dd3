//! Message bubble fragments.

use super::escape_html;
use crate::chat::{Message, Sender, Submission};

/// Route the pending slot posts to when it loads.
pub const REPLIES_ROUTE: &str = "/chat/replies";

/// Render one message bubble.
///
/// Each line is escaped on its own and lines are joined with `<br>`, so
/// breaks are real elements and nothing in the text is read as markup.
pub fn render_message(message: &Message) -> String {
    let body = message
        .lines()
        .iter()
        .map(|line| escape_html(line))
        .collect::<Vec<_>>()
        .join("<br>");

    format!(
        r#"<div class="message {class}"><p>{body}</p></div>"#,
        class = message.sender().css_class()
    )
}

/// Render the slot reserved for the bot's answer to `submission`.
///
/// Once inserted, the page script posts `data-movie` to `data-reply-url` and
/// replaces the slot with the answer, so replies land in submission order
/// whatever order the backend responds in.
pub fn render_pending_reply(submission: &Submission) -> String {
    format!(
        r#"<div id="reply-{seq}" class="message {class} pending" data-reply-url="{route}" data-movie="{movie}" aria-busy="true"><p class="typing">&hellip;</p></div>"#,
        seq = submission.seq,
        class = Sender::Bot.css_class(),
        route = REPLIES_ROUTE,
        movie = escape_html(&submission.title),
    )
}
