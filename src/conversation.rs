//! Append-only conversation log

use crate::events::{ConversationEntry, Sender};

/// Ordered record of the messages exchanged in one session.
///
/// Entries are only ever appended; insertion order is the display order and
/// the order used when extracting recent context for the selector.
#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    entries: Vec<ConversationEntry>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new entry and return a reference to it
    pub fn append(&mut self, sender: Sender, text: impl Into<String>) -> &ConversationEntry {
        self.entries.push(ConversationEntry::new(sender, text));
        let last = self.entries.len() - 1;
        &self.entries[last]
    }

    /// The trailing `n` entries, oldest first
    pub fn last_n(&self, n: usize) -> &[ConversationEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    pub fn entries(&self) -> &[ConversationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
