//! Chat message model.

use serde::{Deserialize, Serialize};

/// Who a message bubble is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Lowercase name, as used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }

    /// CSS class tagging a bubble for styling.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::User => "user-message",
            Self::Bot => "bot-message",
        }
    }
}

/// A single rendered chat entry.
///
/// Text is kept as literal lines; renderers join them with structural line
/// breaks and never interpret the text as markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    sender: Sender,
    lines: Vec<String>,
}

impl Message {
    /// A user message holding `text` verbatim.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            lines: vec![text.into()],
        }
    }

    /// A single-line bot message.
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            lines: vec![text.into()],
        }
    }

    /// A bot message made of several lines, rendered with breaks between them.
    pub fn bot_lines(lines: Vec<String>) -> Self {
        Self {
            sender: Sender::Bot,
            lines,
        }
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Plain text with lines joined by `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_tags() {
        assert_eq!(Sender::User.css_class(), "user-message");
        assert_eq!(Sender::Bot.css_class(), "bot-message");
        assert_eq!(serde_json::to_string(&Sender::Bot).unwrap(), "\"bot\"");
    }

    #[test]
    fn test_bot_lines_text() {
        let message = Message::bot_lines(vec!["Title A".into(), "Title B".into()]);
        assert_eq!(message.sender(), Sender::Bot);
        assert_eq!(message.lines().len(), 2);
        assert_eq!(message.text(), "Title A\nTitle B");
    }
}
