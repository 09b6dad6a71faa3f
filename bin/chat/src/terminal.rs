//! Line-oriented view for a terminal.

use ipo_compass_conversation::{Speaker, Suggestions, TranscriptEntry, ViewSink};
use std::io::Write;

const TYPING_LINE: &str = "Nexa is typing...";

/// Prints transcript entries as `[HH:MM] Speaker: markup` lines.
#[derive(Debug)]
pub struct TerminalView<W> {
    out: W,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Prints a host message that is not part of the transcript.
    pub fn notice(&mut self, message: &str) {
        self.write_line(format_args!("-- {message}"));
    }

    /// Prints the numbered suggestion shortcuts.
    pub fn suggestions(&mut self, suggestions: &Suggestions) {
        self.notice("Try one of these with /suggest <number>:");
        for (index, text) in suggestions.iter().enumerate() {
            self.write_line(format_args!("   {}. {text}", index + 1));
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{line}") {
            tracing::warn!(error = %e, "failed to write to terminal");
        }
    }
}

impl<W: Write> ViewSink for TerminalView<W> {
    fn entry_appended(&mut self, entry: &TranscriptEntry) {
        // Users already see what they typed on the line above.
        if entry.speaker() == Speaker::User {
            return;
        }
        self.write_line(format_args!(
            "[{}] {}: {}",
            entry.timestamp(),
            entry.speaker().label(),
            entry.rendered_markup()
        ));
    }

    fn pending_shown(&mut self) {
        self.write_line(format_args!("{TYPING_LINE}"));
    }

    fn pending_hidden(&mut self) {}

    fn scroll_to_latest(&mut self) {
        if let Err(e) = self.out.flush() {
            tracing::warn!(error = %e, "failed to flush terminal");
        }
    }
}
