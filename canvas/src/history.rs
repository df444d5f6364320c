//! Undo/redo history: a bounded stack of full scene snapshots.
//!
//! DESIGN
//! ======
//! Every committing operation records the whole scene, not a diff. Snapshots
//! are immutable and shared behind `Arc`. Committing after an undo truncates the redo tail; exceeding
//! the capacity evicts the oldest entry and shifts the cursor with it.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::collections::VecDeque;
use std::sync::Arc;

use crate::scene::SceneSnapshot;

/// Bounded snapshot stack with a cursor at the current state.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<Arc<SceneSnapshot>>,
    index: usize,
    capacity: usize,
}

impl History {
    /// An empty history holding at most `capacity` snapshots (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { entries: VecDeque::with_capacity(capacity), index: 0, capacity }
    }

    /// Record `snapshot` as the new current state.
    pub fn commit(&mut self, snapshot: SceneSnapshot) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
        self.entries.push_back(Arc::new(snapshot));
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        self.index = self.entries.len() - 1;
    }

    /// Step back one entry. `None` when already at the oldest.
    pub fn undo(&mut self) -> Option<Arc<SceneSnapshot>> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        self.entries.get(self.index).cloned()
    }

    /// Step forward one entry. `None` when already at the newest.
    pub fn redo(&mut self) -> Option<Arc<SceneSnapshot>> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        self.entries.get(self.index).cloned()
    }

    /// Drop everything and start over from `snapshot`.
    pub fn reset(&mut self, snapshot: SceneSnapshot) {
        self.entries.clear();
        self.index = 0;
        self.commit(snapshot);
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
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
