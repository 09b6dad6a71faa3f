//! Input line parsing.

/// What a line of terminal input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    /// Send the text to the assistant.
    Submit(&'a str),
    /// Print the suggestion shortcuts.
    ListSuggestions,
    /// Choose a suggestion by its 1-based number.
    Suggest(usize),
    /// Leave once pending replies have arrived.
    Quit,
    /// A slash command that was not understood.
    Unknown(&'a str),
}

/// Parses one input line.
#[must_use]
pub fn parse(line: &str) -> Command<'_> {
    let trimmed = line.trim();
    let Some(rest) = trimmed.strip_prefix('/') else {
        return Command::Submit(line);
    };

    let mut parts = rest.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("quit" | "exit"), None, None) => Command::Quit,
        (Some("suggest"), None, None) => Command::ListSuggestions,
        (Some("suggest"), Some(number), None) => match number.parse() {
            Ok(number) => Command::Suggest(number),
            Err(_) => Command::Unknown(trimmed),
        },
        _ => Command::Unknown(trimmed),
    }
}
