//! The append-only calculation history log.

/// An ordered, append-only sequence of human-readable history entries.
///
/// Ownership discipline: only the last entry may be mutated, and only by
/// appending text to it. Entries are never rewritten or removed
/// individually; `clear` is the sole way to drop them. Growth is unbounded
/// here, the UI renders a bounded recent window via [`HistoryLog::recent`].
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Vec<String>,
}

impl HistoryLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new entry at the end of the log.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    /// Append text to the last entry. No-op on an empty log.
    pub fn amend_last(&mut self, suffix: &str) {
        if let Some(last) = self.entries.last_mut() {
            last.push_str(suffix);
        }
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The most recent `n` entries, oldest first.
    #[must_use]
    pub fn recent(&self, n: usize) -> &[String] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
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
}
