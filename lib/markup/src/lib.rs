//! Lightweight markup renderer for ipo-compass assistant replies.
//!
//! Assistant replies arrive as plain text using a small fixed grammar:
//!
//! - `#`, `##`, `###` headings at the start of a line
//! - `- ` bullet items, optionally indented
//! - `**bold**` and `*italic*` inline emphasis
//! - newlines as line breaks
//!
//! Rendering happens in two steps. [`parse`] scans the text into a
//! [`Document`] of tagged blocks and inlines, and [`to_html`] serializes
//! that tree into an HTML fragment. Every text node is escaped on the way
//! out, so the only tags that can appear in the output are the ones this
//! crate writes itself.

pub mod ast;
pub mod html;
pub mod parse;

pub use ast::{Block, Document, HeadingLevel, Inline};
pub use html::to_html;
pub use parse::parse;

/// Renders reply text into a sanitized HTML fragment.
///
/// Never fails. Anything outside the grammar is kept as literal,
/// escaped text.
#[must_use]
pub fn render(text: &str) -> String {
    to_html(&parse(text))
}
