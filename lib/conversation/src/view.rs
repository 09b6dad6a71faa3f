//! View effects exposed to a hosting surface.

use crate::transcript::{Speaker, TranscriptEntry};
use ipo_compass_core::EntryId;

/// Receives the observable effects of the controller.
///
/// Hosts implement this to draw the widget in whatever toolkit they use.
/// All calls happen on the task that owns the controller.
pub trait ViewSink {
    /// A new entry was appended to the transcript.
    fn entry_appended(&mut self, entry: &TranscriptEntry);

    /// The typing indicator was inserted at the tail of the transcript.
    fn pending_shown(&mut self);

    /// The typing indicator was removed.
    fn pending_hidden(&mut self);

    /// The input field was cleared after an accepted submission.
    fn input_cleared(&mut self) {}

    /// The transcript should scroll so its newest element is visible.
    fn scroll_to_latest(&mut self) {}
}

/// A view effect, as recorded by [`RecordingView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    EntryAppended {
        entry_id: EntryId,
        speaker: Speaker,
        markup: String,
        timestamp: String,
    },
    PendingShown,
    PendingHidden,
    InputCleared,
    ScrolledToLatest,
}

/// A sink that records every effect in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    events: Vec<ViewEvent>,
}

impl RecordingView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[ViewEvent] {
        &self.events
    }

    /// Drains the recorded events.
    pub fn take(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.events)
    }

    /// Counts events matching a predicate.
    pub fn count(&self, predicate: impl Fn(&ViewEvent) -> bool) -> usize {
        self.events.iter().filter(|event| predicate(event)).count()
    }
}

impl ViewSink for RecordingView {
    fn entry_appended(&mut self, entry: &TranscriptEntry) {
        self.events.push(ViewEvent::EntryAppended {
            entry_id: entry.id(),
            speaker: entry.speaker(),
            markup: entry.rendered_markup().to_string(),
            timestamp: entry.timestamp(),
        });
    }

    fn pending_shown(&mut self) {
        self.events.push(ViewEvent::PendingShown);
    }

    fn pending_hidden(&mut self) {
        self.events.push(ViewEvent::PendingHidden);
    }

    fn input_cleared(&mut self) {
        self.events.push(ViewEvent::InputCleared);
    }

    fn scroll_to_latest(&mut self) {
        self.events.push(ViewEvent::ScrolledToLatest);
    }
}
