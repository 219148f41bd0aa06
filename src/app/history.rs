//! Session history stack.
//!
//! Models the browser's history for one tab: a list of entries and a cursor.
//! Pushing drops everything after the cursor; replacing overwrites the entry
//! under it; traversal only moves the cursor, and only once the traversal
//! navigation commits.

use super::location::Location;

/// Browser-style history of visited locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<Location>,
    index: usize,
}

impl History {
    /// Creates a history holding a single entry.
    #[must_use]
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    /// The entry under the cursor.
    #[must_use]
    pub fn current(&self) -> &Location {
        &self.entries[self.index]
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[Location] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: a history has at least its initial entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cursor position, zero-based.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Adds a new entry after the cursor, discarding forward entries.
    pub fn push(&mut self, location: Location) {
        self.entries.truncate(self.index + 1);
        self.entries.push(location);
        self.index = self.entries.len() - 1;
    }

    /// Overwrites the entry under the cursor.
    pub fn replace(&mut self, location: Location) {
        self.entries[self.index] = location;
    }

    /// Index and entry one step back from the cursor, without moving it.
    ///
    /// Returns `None` at the oldest entry.
    #[must_use]
    pub fn back_entry(&self) -> Option<(usize, &Location)> {
        let index = self.index.checked_sub(1)?;
        Some((index, &self.entries[index]))
    }

    /// Index and entry one step forward from the cursor, without moving it.
    ///
    /// Returns `None` at the newest entry.
    #[must_use]
    pub fn forward_entry(&self) -> Option<(usize, &Location)> {
        let index = self.index + 1;
        self.entries.get(index).map(|location| (index, location))
    }

    /// Moves the cursor to `index`. Out of range indexes are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.entries.len() {
            self.index = index;
        }
    }
}
