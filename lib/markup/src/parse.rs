//! Line and span scanner.
//!
//! Lines are classified first (heading, list item, plain), then each
//! line's remaining text is scanned for emphasis spans. Bold is always
//! tried before italic at a given `*`, so `**a*b**` is one bold span with
//! a literal asterisk inside.

use crate::ast::{Block, Document, HeadingLevel, Inline};

/// Heading markers, longest first so `##` never claims a `###` line.
const HEADING_MARKERS: [(&str, HeadingLevel); 3] = [
    ("### ", HeadingLevel::H3),
    ("## ", HeadingLevel::H2),
    ("# ", HeadingLevel::H1),
];

const ITEM_MARKER: &str = "- ";

enum LineKind<'a> {
    Heading(HeadingLevel, &'a str),
    Item(&'a str),
    Plain(&'a str),
}

/// Parses reply text into a [`Document`].
///
/// Every newline becomes a [`Block::LineBreak`] except one joining two
/// list items, which the list run absorbs.
#[must_use]
pub fn parse(text: &str) -> Document {
    let mut blocks = Vec::new();
    let mut lines = text.split('\n').peekable();
    let mut first = true;

    while let Some(raw) = lines.next() {
        let line = if lines.peek().is_some() {
            raw.strip_suffix('\r').unwrap_or(raw)
        } else {
            raw
        };
        let kind = classify(line);

        if !first {
            let continues_list = matches!(kind, LineKind::Item(_))
                && matches!(blocks.last(), Some(Block::List { .. }));
            if !continues_list {
                blocks.push(Block::LineBreak);
            }
        }
        first = false;

        match kind {
            LineKind::Heading(level, rest) => blocks.push(Block::Heading {
                level,
                content: parse_inline(rest),
            }),
            LineKind::Item(rest) => match blocks.last_mut() {
                Some(Block::List { items }) => items.push(parse_inline(rest)),
                _ => blocks.push(Block::List {
                    items: vec![parse_inline(rest)],
                }),
            },
            LineKind::Plain(rest) => {
                if !rest.is_empty() {
                    blocks.push(Block::Line {
                        content: parse_inline(rest),
                    });
                }
            }
        }
    }

    Document { blocks }
}

fn classify(line: &str) -> LineKind<'_> {
    for (marker, level) in HEADING_MARKERS {
        if let Some(rest) = line.strip_prefix(marker) {
            return LineKind::Heading(level, rest);
        }
    }

    match line.trim_start_matches([' ', '\t']).strip_prefix(ITEM_MARKER) {
        Some(rest) => LineKind::Item(rest),
        None => LineKind::Plain(line),
    }
}

/// Which span kinds may open at the current nesting depth.
#[derive(Debug, Clone, Copy)]
struct Spans {
    bold: bool,
    italic: bool,
}

/// Scans a single line for emphasis spans.
#[must_use]
pub fn parse_inline(text: &str) -> Vec<Inline> {
    scan(
        text,
        Spans {
            bold: true,
            italic: true,
        },
    )
}

fn scan(text: &str, spans: Spans) -> Vec<Inline> {
    let bytes = text.as_bytes();
    let mut nodes = Vec::new();
    let mut text_start = 0;
    let mut i = 0;

    // Only `*` positions are ever used as slice bounds, so stepping
    // byte-wise through multi-byte characters is fine.
    while i < bytes.len() {
        if bytes[i] != b'*' {
            i += 1;
            continue;
        }

        if spans.bold
            && let Some(close) = bold_close(text, i)
        {
            push_text(&mut nodes, &text[text_start..i]);
            let inner = Spans {
                bold: false,
                ..spans
            };
            nodes.push(Inline::Bold(scan(&text[i + 2..close], inner)));
            i = close + 2;
            text_start = i;
            continue;
        }

        if spans.italic
            && let Some(close) = italic_close(text, i, spans.bold)
        {
            push_text(&mut nodes, &text[text_start..i]);
            let inner = Spans {
                italic: false,
                ..spans
            };
            nodes.push(Inline::Italic(scan(&text[i + 1..close], inner)));
            i = close + 1;
            text_start = i;
            continue;
        }

        i += 1;
    }

    push_text(&mut nodes, &text[text_start..]);
    nodes
}

/// Position of the `**` closing a bold span opened at `open`.
///
/// The first `**` after the opener always closes the span; an empty span
/// is not a span.
fn bold_close(text: &str, open: usize) -> Option<usize> {
    if !text.as_bytes()[open..].starts_with(b"**") {
        return None;
    }
    let body = open + 2;
    let close = body + text.get(body..)?.find("**")?;
    (close > body).then_some(close)
}

/// Position of the `*` closing an italic span opened at `open`.
///
/// Complete bold spans inside the italic are stepped over when bold is
/// still allowed at this depth.
fn italic_close(text: &str, open: usize, skip_bold: bool) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut j = open + 1;

    while j < bytes.len() {
        if bytes[j] == b'*' {
            if skip_bold && let Some(close) = bold_close(text, j) {
                j = close + 2;
                continue;
            }
            return (j > open + 1).then_some(j);
        }
        j += 1;
    }

    None
}

fn push_text(nodes: &mut Vec<Inline>, text: &str) {
    if !text.is_empty() {
        nodes.push(Inline::Text(text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Inline {
        Inline::Text(s.to_string())
    }

    #[test]
    fn longest_heading_marker_wins() {
        let doc = parse("### Deep\n## Mid\n# Top");
        let levels: Vec<_> = doc
            .blocks
            .iter()
            .filter_map(|block| match block {
                Block::Heading { level, .. } => Some(*level),
                Block::LineBreak => None,
                other => panic!("expected heading, got {other:?}"),
            })
            .collect();
        assert_eq!(
            levels,
            vec![HeadingLevel::H3, HeadingLevel::H2, HeadingLevel::H1]
        );
    }

    #[test]
    fn heading_requires_space_after_marker() {
        let doc = parse("#hashtag");
        assert_eq!(
            doc.blocks,
            vec![Block::Line {
                content: vec![text("#hashtag")]
            }]
        );
    }

    #[test]
    fn indented_items_join_the_list() {
        let doc = parse("- one\n  - two\n\t- three");
        assert_eq!(
            doc.blocks,
            vec![Block::List {
                items: vec![vec![text("one")], vec![text("two")], vec![text("three")]],
            }]
        );
    }

    #[test]
    fn separate_runs_make_separate_lists() {
        let doc = parse("- a\nbreak\n- b");
        assert_eq!(
            doc.blocks,
            vec![
                Block::List {
                    items: vec![vec![text("a")]],
                },
                Block::LineBreak,
                Block::Line {
                    content: vec![text("break")]
                },
                Block::LineBreak,
                Block::List {
                    items: vec![vec![text("b")]],
                },
            ]
        );
    }

    #[test]
    fn newline_between_plain_lines_breaks() {
        let doc = parse("a\nb");
        assert_eq!(
            doc.blocks,
            vec![
                Block::Line {
                    content: vec![text("a")]
                },
                Block::LineBreak,
                Block::Line {
                    content: vec![text("b")]
                },
            ]
        );
    }

    #[test]
    fn newlines_around_headings_break() {
        let doc = parse("Intro\n## Risk\nText");
        assert_eq!(
            doc.blocks,
            vec![
                Block::Line {
                    content: vec![text("Intro")]
                },
                Block::LineBreak,
                Block::Heading {
                    level: HeadingLevel::H2,
                    content: vec![text("Risk")],
                },
                Block::LineBreak,
                Block::Line {
                    content: vec![text("Text")]
                },
            ]
        );
    }

    #[test]
    fn blank_lines_keep_their_breaks() {
        let doc = parse("Para\n\n## H");
        assert_eq!(
            doc.blocks,
            vec![
                Block::Line {
                    content: vec![text("Para")]
                },
                Block::LineBreak,
                Block::LineBreak,
                Block::Heading {
                    level: HeadingLevel::H2,
                    content: vec![text("H")],
                },
            ]
        );
    }

    #[test]
    fn empty_input_has_no_blocks() {
        assert!(parse("").blocks.is_empty());
    }

    #[test]
    fn carriage_returns_before_newlines_are_dropped() {
        assert_eq!(parse("a\r\nb"), parse("a\nb"));
    }

    #[test]
    fn bold_is_non_greedy() {
        assert_eq!(
            parse_inline("**a** and **b**"),
            vec![
                Inline::Bold(vec![text("a")]),
                text(" and "),
                Inline::Bold(vec![text("b")]),
            ]
        );
    }

    #[test]
    fn bold_keeps_inner_single_asterisk() {
        assert_eq!(
            parse_inline("**a*b**"),
            vec![Inline::Bold(vec![text("a*b")])]
        );
    }

    #[test]
    fn italic_inside_bold() {
        assert_eq!(
            parse_inline("**x *y* z**"),
            vec![Inline::Bold(vec![
                text("x "),
                Inline::Italic(vec![text("y")]),
                text(" z"),
            ])]
        );
    }

    #[test]
    fn bold_inside_italic() {
        assert_eq!(
            parse_inline("*a **b** c*"),
            vec![Inline::Italic(vec![
                text("a "),
                Inline::Bold(vec![text("b")]),
                text(" c"),
            ])]
        );
    }

    #[test]
    fn empty_spans_are_literal() {
        assert_eq!(parse_inline("****"), vec![text("****")]);
        assert_eq!(parse_inline("**"), vec![text("**")]);
    }

    #[test]
    fn dangling_bold_opener_can_still_open_italic() {
        assert_eq!(
            parse_inline("**a*"),
            vec![text("*"), Inline::Italic(vec![text("a")])]
        );
    }

    #[test]
    fn spans_do_not_cross_lines() {
        let doc = parse("**a\nb**");
        assert_eq!(
            doc.blocks,
            vec![
                Block::Line {
                    content: vec![text("**a")]
                },
                Block::LineBreak,
                Block::Line {
                    content: vec![text("b**")]
                },
            ]
        );
    }

    #[test]
    fn multibyte_text_survives_scanning() {
        assert_eq!(
            parse_inline("₹120 – **₹130** ✓"),
            vec![
                text("₹120 – "),
                Inline::Bold(vec![text("₹130")]),
                text(" ✓"),
            ]
        );
    }
}
