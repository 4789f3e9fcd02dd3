//! HTML rendering for the chat page.
//!
//! Pages and fragments are plain strings built with `format!`; the page
//! script (`static/chat.js`) appends fragments to `#chat-box`. All user and backend text goes
//! through [`escape_html`] before it lands in markup.
//!
//! # Structure
//!
//! - [`page`]: document shell and chat page markup
//! - [`bubble`]: message bubble and pending-reply fragments

pub mod bubble;
pub mod page;

pub use bubble::{render_message, render_pending_reply};
pub use page::{chat_page, html_shell};

/// Escape text for use in element content or a double-quoted attribute.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
