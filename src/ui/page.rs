//! Document shell and the chat page.

use super::escape_html;
use crate::chat::FALLBACK_MESSAGE;

/// Route the chat form posts to.
pub const MESSAGES_ROUTE: &str = "/chat/messages";

/// Page script that submits the form and fills reply slots.
pub const CHAT_SCRIPT: &str = "/static/chat.js";

/// Generate the HTML shell for the application.
pub fn html_shell(title: &str, content: &str) -> String {
    let title = escape_html(title);
    format!(r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="Movie recommendation chat">
    <title>{title} - Movie Chat</title>

    <!-- Application script (local) -->
    <script defer src="{script}"></script>

    <link rel="stylesheet" href="/static/app.css">
</head>
<body>
    <main id="app" class="container">
        {content}
    </main>
</body>
</html>"##,
        script = CHAT_SCRIPT
    )
}

/// Chat page content.
///
/// The form owns `user-input` and `send-btn`, so both a click on the button
/// and Enter in the field submit it. The page script posts the form to its
/// `action` and appends the returned fragment to `data-target`; a blank
/// submission comes back as `204 No Content` and leaves the page and the
/// input alone.
pub fn chat_page() -> String {
    format!(
        r##"
    <div class="chat-shell">
        <header class="chat-header">
            <h2>Movie Recommender</h2>
        </header>

        <div
            id="chat-box"
            class="chat-box"
            data-fallback="{fallback}"
            aria-live="polite"
            aria-label="Chat messages"
        ></div>

        <form
            id="chat-form"
            class="chat-input"
            action="{route}"
            method="post"
            data-target="#chat-box"
        >
            <input
                id="user-input"
                name="message"
                type="text"
                autocomplete="off"
                placeholder="Enter a movie title, e.g. Star Wars (1977)"
            >
            <button id="send-btn" type="submit">Send</button>
        </form>
    </div>
    "##,
        route = MESSAGES_ROUTE,
        fallback = escape_html(FALLBACK_MESSAGE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_page_exposes_dom_surface() {
        let html = chat_page();
        for id in [r#"id="chat-box""#, r#"id="user-input""#, r#"id="send-btn""#] {
            assert!(html.contains(id), "missing {id}");
        }
        assert!(html.contains(r#"action="/chat/messages""#));
        assert!(html.contains(r##"data-target="#chat-box""##));
        assert!(html.contains(&format!(r#"data-fallback="{FALLBACK_MESSAGE}""#)));
    }

    #[test]
    fn test_shell_escapes_title_and_loads_script() {
        let html = html_shell("<Chat>", "<p>body</p>");
        assert!(html.contains("<title>&lt;Chat&gt; - Movie Chat</title>"));
        assert!(html.contains(r#"<script defer src="/static/chat.js"></script>"#));
        assert!(html.contains("<p>body</p>"));
    }
}
