//! Document tree produced by the scanner.

use serde::{Deserialize, Serialize};

/// Heading depth, from `#` through `###`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Returns the numeric depth (1-3).
    #[must_use]
    pub const fn depth(self) -> u8 {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
        }
    }
}

/// Inline content within a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Inline {
    /// Literal text, stored unescaped.
    Text(String),
    /// `**...**` span.
    Bold(Vec<Inline>),
    /// `*...*` span.
    Italic(Vec<Inline>),
}

/// A block-level element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// A heading line with its marker stripped.
    Heading {
        level: HeadingLevel,
        content: Vec<Inline>,
    },
    /// A run of consecutive `- ` lines.
    List { items: Vec<Vec<Inline>> },
    /// A non-empty plain line.
    Line { content: Vec<Inline> },
    /// A source newline that is not absorbed by a list run.
    LineBreak,
}

/// A parsed reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Blocks in source order.
    pub blocks: Vec<Block>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_depth() {
        assert_eq!(HeadingLevel::H1.depth(), 1);
        assert_eq!(HeadingLevel::H3.depth(), 3);
    }

    #[test]
    fn block_serializes_with_kind_tag() {
        let block = Block::Heading {
            level: HeadingLevel::H2,
            content: vec![Inline::Text("Risk".to_string())],
        };
        let json = serde_json::to_value(&block).expect("serialize");
        assert_eq!(json["kind"], "heading");
        assert_eq!(json["level"], "h2");
    }
}
