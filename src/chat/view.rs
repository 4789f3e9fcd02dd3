//! The display surface the chat controller drives.

use super::message::Message;

/// Input field plus append-only message list.
///
/// This is the page's `user-input` / `chat-box` pair expressed as a trait so
/// the same controller can drive a browser fragment, a JSON exchange or a
/// terminal.
pub trait ChatView {
    /// Current value of the input field, untrimmed.
    fn input_value(&self) -> String;

    /// Empty the input field.
    fn clear_input(&mut self);

    /// Append `message` to the list and scroll so it is visible.
    fn render_message(&mut self, message: Message);
}

/// In-memory [`ChatView`].
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
    input: String,
    scroll_top: usize,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transcript whose input field already holds `input`.
    pub fn with_input(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }

    /// Index of the first visible entry.
    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    /// Largest valid scroll position.
    pub fn scroll_height(&self) -> usize {
        self.messages.len()
    }

    pub fn is_scrolled_to_bottom(&self) -> bool {
        self.scroll_top() == self.scroll_height()
    }
}

impl ChatView for Transcript {
    fn input_value(&self) -> String {
        self.input.clone()
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn render_message(&mut self, message: Message) {
        self.messages.push(message);
        self.scroll_top = self.scroll_height();
    }
}
