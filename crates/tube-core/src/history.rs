//! Undo/Redo history over registry snapshots
//!
//! The top of the past stack is always the state currently on screen, so
//! undo reveals the entry below it rather than the top itself.

use std::collections::VecDeque;

use crate::registry::RegistrySnapshot;

/// Default maximum number of past entries
pub const DEFAULT_CAPACITY: usize = 50;

/// A recorded registry state
#[derive(Debug, Clone, PartialEq)]
pub struct UndoEntry {
    pub snapshot: RegistrySnapshot,
    /// Description of the action that led to this state
    pub description: String,
}

/// Undo/redo history manager
#[derive(Debug)]
pub struct UndoHistory {
    /// Recorded states, oldest first; the back is the current state
    past: VecDeque<UndoEntry>,
    /// States that can be redone; the back is the next redo
    future: Vec<UndoEntry>,
    /// Maximum number of past entries
    capacity: usize,
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl UndoHistory {
    /// Create a new history manager with the specified maximum entries
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            past: VecDeque::with_capacity(capacity),
            future: Vec::new(),
            capacity,
        }
    }

    /// Record the state reached after a committed mutation
    pub fn record(&mut self, snapshot: RegistrySnapshot, description: &str) {
        self.future.clear();
        self.past.push_back(UndoEntry {
            snapshot,
            description: description.to_string(),
        });

        while self.past.len() > self.capacity {
            self.past.pop_front();
        }
    }

    /// The state that `undo` would reveal, without moving anything
    pub fn undo_target(&self) -> Option<&UndoEntry> {
        if self.past.len() < 2 {
            return None;
        }
        self.past.get(self.past.len() - 2)
    }

    /// The state that `redo` would apply, without moving anything
    pub fn redo_target(&self) -> Option<&UndoEntry> {
        self.future.last()
    }

    /// Step back one entry, returning the new current state
    ///
    /// Returns `None` when there is no earlier state to go back to.
    pub fn undo(&mut self) -> Option<&UndoEntry> {
        if self.past.len() < 2 {
            return None;
        }
        let current = self.past.pop_back()?;
        self.future.push(current);
        self.past.back()
    }

    /// Re-apply the most recently undone entry, returning it
    pub fn redo(&mut self) -> Option<&UndoEntry> {
        let next = self.future.pop()?;
        self.past.push_back(next);
        while self.past.len() > self.capacity {
            self.past.pop_front();
        }
        self.past.back()
    }

    /// The state currently on screen
    pub fn current(&self) -> Option<&UndoEntry> {
        self.past.back()
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.past.len() >= 2
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::TubeParams;
    use crate::registry::TubeRecord;
    use glam::Vec3;

    fn snapshot_with(count: usize) -> RegistrySnapshot {
        RegistrySnapshot {
            tubes: (0..count)
                .map(|i| {
                    let id = format!("Tube{}", i + 1);
                    TubeRecord {
                        id: id.clone(),
                        params: TubeParams::new(id, "Square", 20.0, 20.0, 2.0, 100.0, 0.0),
                        position: Vec3::new(0.0, 10.0, 0.0),
                        rotation_y: 0.0,
                    }
                })
                .collect(),
        }
    }

    #[test]
    fn test_undo_needs_two_entries() {
        let mut history = UndoHistory::default();
        assert!(history.undo().is_none());

        history.record(snapshot_with(0), "Initial");
        assert!(!history.can_undo());
        assert!(history.undo().is_none());
        assert_eq!(history.past_len(), 1);
        assert_eq!(history.future_len(), 0);
    }

    #[test]
    fn test_undo_reveals_previous_state() {
        let mut history = UndoHistory::default();
        history.record(snapshot_with(0), "Initial");
        history.record(snapshot_with(1), "Add Tube");
        history.record(snapshot_with(2), "Add Tube");

        assert_eq!(history.undo_target().unwrap().snapshot, snapshot_with(1));
        let revealed = history.undo().unwrap();
        assert_eq!(revealed.snapshot, snapshot_with(1));
        assert_eq!(history.past_len(), 2);
        assert_eq!(history.future_len(), 1);
    }

    #[test]
    fn test_redo_moves_entry_back() {
        let mut history = UndoHistory::default();
        history.record(snapshot_with(0), "Initial");
        history.record(snapshot_with(1), "Add Tube");
        history.undo();

        assert_eq!(history.redo_target().unwrap().snapshot, snapshot_with(1));
        let applied = history.redo().unwrap();
        assert_eq!(applied.snapshot, snapshot_with(1));
        assert_eq!(history.current().unwrap().snapshot, snapshot_with(1));
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_undo_then_redo_is_identity() {
        let mut history = UndoHistory::default();
        history.record(snapshot_with(0), "Initial");
        history.record(snapshot_with(1), "Add Tube");
        history.record(snapshot_with(2), "Add Tube");
        let before = history.current().cloned();

        history.undo();
        history.redo();
        assert_eq!(history.current().cloned(), before);
        assert_eq!(history.past_len(), 3);
        assert_eq!(history.future_len(), 0);
    }

    #[test]
    fn test_record_clears_future() {
        let mut history = UndoHistory::default();
        history.record(snapshot_with(0), "Initial");
        history.record(snapshot_with(1), "Add Tube");
        history.undo();
        assert!(history.can_redo());

        history.record(snapshot_with(3), "Add Tube");
        assert!(!history.can_redo());
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = UndoHistory::default();
        for i in 0..120 {
            history.record(snapshot_with(i % 4), "Add Tube");
            assert!(history.past_len() <= DEFAULT_CAPACITY);
        }
        assert_eq!(history.past_len(), DEFAULT_CAPACITY);

        // all the way back stops at the oldest surviving entry
        let mut steps = 0;
        while history.undo().is_some() {
            steps += 1;
        }
        assert_eq!(steps, DEFAULT_CAPACITY - 1);
        assert_eq!(history.past_len(), 1);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let history = UndoHistory::new(0);
        assert_eq!(history.capacity(), 1);
    }
}
