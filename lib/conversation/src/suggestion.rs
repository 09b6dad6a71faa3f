//! Suggestion shortcuts offered under the input field.

/// Shortcuts shown when the widget opens.
pub const DEFAULT_SUGGESTIONS: [&str; 4] = [
    "What is an IPO?",
    "How do I apply for an IPO?",
    "What are the risks of investing in IPOs?",
    "Explain grey market premium (GMP)",
];

/// An ordered list of suggestion texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestions {
    items: Vec<String>,
}

impl Suggestions {
    #[must_use]
    pub fn new<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Looks up a suggestion by its 1-based position.
    #[must_use]
    pub fn get(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|index| self.items.get(index))
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Suggestions {
    fn default() -> Self {
        Self::new(DEFAULT_SUGGESTIONS)
    }
}
