//! Bounded linear undo/redo log.
//!
//! # Invariants
//! - `-1 <= index() < len()`; `index() == -1` only while the log is empty.
//! - Pushing while the cursor is behind the tail discards the redo branch.
//! - `len() <= capacity()`; the oldest entry is evicted first.

use crate::model::atom::AtomConfiguration;
use std::collections::VecDeque;

/// Default number of snapshots retained by the engine.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryLog {
    entries: VecDeque<AtomConfiguration>,
    cursor: Option<usize>,
    capacity: usize,
}

impl HistoryLog {
    /// Creates an empty log. `capacity` floors at 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY)),
            cursor: None,
            capacity,
        }
    }

    /// Creates a log whose first entry is `initial`.
    pub fn seeded(capacity: usize, initial: AtomConfiguration) -> Self {
        let mut log = Self::new(capacity);
        log.push(initial);
        log
    }

    /// Appends a snapshot after the cursor, truncating any redo branch.
    pub fn push(&mut self, snapshot: AtomConfiguration) {
        match self.cursor {
            Some(cursor) => self.entries.truncate(cursor + 1),
            None => self.entries.clear(),
        }
        self.entries.push_back(snapshot);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Steps back one entry and returns it, or `None` at the head.
    pub fn undo(&mut self) -> Option<AtomConfiguration> {
        if !self.can_undo() {
            return None;
        }
        let cursor = self.cursor? - 1;
        self.cursor = Some(cursor);
        self.entries.get(cursor).copied()
    }

    /// Steps forward one entry and returns it, or `None` at the tail.
    pub fn redo(&mut self) -> Option<AtomConfiguration> {
        if !self.can_redo() {
            return None;
        }
        let cursor = self.cursor.map_or(0, |cursor| cursor + 1);
        self.cursor = Some(cursor);
        self.entries.get(cursor).copied()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|cursor| cursor > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.index() < self.entries.len() as i64 - 1
    }

    /// Cursor position, `-1` when empty.
    pub fn index(&self) -> i64 {
        self.cursor.map_or(-1, |cursor| cursor as i64)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot under the cursor.
    pub fn current(&self) -> Option<&AtomConfiguration> {
        self.cursor.and_then(|cursor| self.entries.get(cursor))
    }

    /// Read-only view of every retained snapshot, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &AtomConfiguration> {
        self.entries.iter()
    }
}
