//! HTML serialization.

use crate::ast::{Block, Document, HeadingLevel, Inline};

const LIST_OPEN: &str = r#"<ul class="chat-list">"#;

/// Serializes a document into an HTML fragment.
#[must_use]
pub fn to_html(document: &Document) -> String {
    let mut out = String::new();
    for block in &document.blocks {
        write_block(&mut out, block);
    }
    out
}

fn write_block(out: &mut String, block: &Block) {
    match block {
        Block::Heading { level, content } => {
            out.push_str(heading_open(*level));
            write_inlines(out, content);
            out.push_str(heading_close(*level));
        }
        Block::List { items } => {
            out.push_str(LIST_OPEN);
            for item in items {
                out.push_str("<li>");
                write_inlines(out, item);
                out.push_str("</li>");
            }
            out.push_str("</ul>");
        }
        Block::Line { content } => write_inlines(out, content),
        Block::LineBreak => out.push_str("<br>"),
    }
}

fn heading_open(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => r#"<h1 class="chat-heading chat-heading-1">"#,
        HeadingLevel::H2 => r#"<h2 class="chat-heading chat-heading-2">"#,
        HeadingLevel::H3 => r#"<h3 class="chat-heading chat-heading-3">"#,
    }
}

fn heading_close(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "</h1>",
        HeadingLevel::H2 => "</h2>",
        HeadingLevel::H3 => "</h3>",
    }
}

fn write_inlines(out: &mut String, nodes: &[Inline]) {
    for node in nodes {
        match node {
            Inline::Text(text) => escape_into(out, text),
            Inline::Bold(children) => {
                out.push_str("<strong>");
                write_inlines(out, children);
                out.push_str("</strong>");
            }
            Inline::Italic(children) => {
                out.push_str("<em>");
                write_inlines(out, children);
                out.push_str("</em>");
            }
        }
    }
}

/// Escapes text for use in HTML element content or quoted attributes.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(&mut out, text);
    out
}

fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
