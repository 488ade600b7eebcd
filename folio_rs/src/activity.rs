//! Append-only activity log shown on the page.
//!
//! Every handler reports what it did here. The browser layer renders the
//! entries as `<li>` items and keeps the newest one scrolled into view.

/// Ordered, append-only list of human-readable lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityLog {
    entries: Vec<String>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `message` as the newest entry.
    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(target: "folio::activity", entry = %message, "log");
        self.entries.push(message);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    /// Entries appended after the first `since` ones.
    pub fn since(&self, since: usize) -> &[String] {
        &self.entries[since.min(self.entries.len())..]
    }
}
