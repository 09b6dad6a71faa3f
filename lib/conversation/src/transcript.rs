//! Transcript entries and the append-only transcript.

use chrono::{DateTime, Local};
use ipo_compass_core::EntryId;
use ipo_compass_markup::html::escape;
use serde::{Deserialize, Serialize};

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    /// Text typed or chosen by the user.
    User,
    /// A reply from the answer service, or the fallback message.
    Assistant,
}

impl Speaker {
    /// Returns the label a host shows next to the entry.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Assistant => "Nexa",
        }
    }
}

/// One entry in the transcript.
///
/// Entries are immutable once built: fields are only readable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    id: EntryId,
    speaker: Speaker,
    raw_text: String,
    rendered_markup: String,
    created_at: DateTime<Local>,
}

impl TranscriptEntry {
    /// Builds a user entry. The markup is the escaped text, never expanded.
    #[must_use]
    pub fn user(raw_text: impl Into<String>) -> Self {
        let raw_text = raw_text.into();
        let rendered_markup = escape(&raw_text);
        Self::new(Speaker::User, raw_text, rendered_markup)
    }

    /// Builds an assistant entry from a service reply.
    #[must_use]
    pub fn assistant(raw_text: impl Into<String>) -> Self {
        let raw_text = raw_text.into();
        let rendered_markup = ipo_compass_markup::render(&raw_text);
        Self::new(Speaker::Assistant, raw_text, rendered_markup)
    }

    /// Builds an assistant entry whose markup is `text` as-is.
    ///
    /// Only for fixed, known-safe strings.
    #[must_use]
    pub(crate) fn assistant_verbatim(text: &'static str) -> Self {
        Self::new(Speaker::Assistant, text.to_string(), text.to_string())
    }

    fn new(speaker: Speaker, raw_text: String, rendered_markup: String) -> Self {
        Self {
            id: EntryId::new(),
            speaker,
            raw_text,
            rendered_markup,
            created_at: Local::now(),
        }
    }

    #[must_use]
    pub fn id(&self) -> EntryId {
        self.id
    }

    #[must_use]
    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    /// The text as captured from input or received from the service.
    #[must_use]
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// HTML-safe markup ready for display.
    #[must_use]
    pub fn rendered_markup(&self) -> &str {
        &self.rendered_markup
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    /// Display time, `HH:MM` in local time.
    #[must_use]
    pub fn timestamp(&self) -> String {
        self.created_at.format("%H:%M").to_string()
    }
}

/// Ordered, append-only log of entries.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry and returns a reference to it.
    pub fn push(&mut self, entry: TranscriptEntry) -> &TranscriptEntry {
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    #[must_use]
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TranscriptEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_entries_are_escaped_not_expanded() {
        let entry = TranscriptEntry::user("**compare** <b>A</b> & B");
        assert_eq!(entry.speaker(), Speaker::User);
        assert_eq!(entry.raw_text(), "**compare** <b>A</b> & B");
        assert_eq!(
            entry.rendered_markup(),
            "**compare** &lt;b&gt;A&lt;/b&gt; &amp; B"
        );
    }

    #[test]
    fn assistant_entries_are_rendered() {
        let entry = TranscriptEntry::assistant("**Listing gain**: 10%");
        assert_eq!(entry.speaker(), Speaker::Assistant);
        assert_eq!(
            entry.rendered_markup(),
            "<strong>Listing gain</strong>: 10%"
        );
    }

    #[test]
    fn timestamp_is_hour_and_minute() {
        let entry = TranscriptEntry::user("hi");
        let stamp = entry.timestamp();
        assert_eq!(stamp.len(), 5);
        assert_eq!(stamp.as_bytes()[2], b':');
        assert_eq!(stamp, entry.created_at().format("%H:%M").to_string());
    }

    #[test]
    fn transcript_keeps_append_order() {
        let mut transcript = Transcript::new();
        let first = transcript.push(TranscriptEntry::user("one")).id();
        let second = transcript.push(TranscriptEntry::assistant("two")).id();

        let ids: Vec<_> = transcript.iter().map(TranscriptEntry::id).collect();
        assert_eq!(ids, vec![first, second]);
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.last().map(TranscriptEntry::raw_text), Some("two"));
    }

    #[test]
    fn entry_serializes_speaker_lowercase() {
        let entry = TranscriptEntry::user("hello");
        let json = serde_json::to_value(&entry).expect("serialize");
        assert_eq!(json["speaker"], "user");
        assert_eq!(json["raw_text"], "hello");
    }
}
