//! Line-oriented chat on a terminal.
//!
//! Each input line is one submission; EOF ends the session.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

use crate::chat::{ChatController, ChatView, Message, Sender, Transcript};

/// A [`Transcript`] that also prints every rendered message.
#[derive(Debug)]
pub struct TerminalView<W> {
    transcript: Transcript,
    out: W,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            transcript: Transcript::new(),
            out,
        }
    }

    pub fn into_parts(self) -> (Transcript, W) {
        (self.transcript, self.out)
    }

    fn print(&mut self, message: &Message) -> std::io::Result<()> {
        let prefix = match message.sender() {
            Sender::User => "you> ",
            Sender::Bot => "bot> ",
        };
        for (i, line) in message.lines().iter().enumerate() {
            let lead = if i == 0 { prefix } else { "     " };
            writeln!(self.out, "{lead}{line}")?;
        }
        self.out.flush()
    }
}

impl<W: Write> ChatView for TerminalView<W> {
    fn input_value(&self) -> String {
        self.transcript.input_value()
    }

    fn clear_input(&mut self) {
        self.transcript.clear_input();
    }

    fn render_message(&mut self, message: Message) {
        if let Err(e) = self.print(&message) {
            warn!(name: "terminal.write.failed", error = %e, "Failed to print message");
        }
        self.transcript.render_message(message);
    }
}

/// Run a chat session reading titles from `input` until EOF.
pub async fn run<R, W>(
    controller: &ChatController,
    input: R,
    out: W,
) -> anyhow::Result<TerminalView<W>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut view = TerminalView::new(out);
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        view.transcript.set_input(line);
        controller.send_message(&mut view).await;
    }

    Ok(view)
}
