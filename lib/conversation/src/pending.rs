//! The typing indicator slot.
//!
//! At most one indicator exists at a time regardless of how many requests
//! are in flight. It is not a transcript entry.

/// Fixed identity of the indicator element in a host view.
pub const PENDING_INDICATOR_ID: &str = "typing-indicator";

/// Single-slot pending indicator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingIndicator {
    visible: bool,
}

impl PendingIndicator {
    /// Inserts the indicator. Returns false if it was already present.
    pub fn show(&mut self) -> bool {
        !std::mem::replace(&mut self.visible, true)
    }

    /// Removes the indicator. Returns false if there was nothing to remove.
    pub fn hide(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_is_idempotent() {
        let mut indicator = PendingIndicator::default();
        assert!(indicator.show());
        assert!(!indicator.show());
        assert!(indicator.is_visible());
    }

    #[test]
    fn hide_reports_removal() {
        let mut indicator = PendingIndicator::default();
        assert!(!indicator.hide());
        indicator.show();
        assert!(indicator.hide());
        assert!(!indicator.is_visible());
    }
}
