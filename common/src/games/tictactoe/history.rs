use std::collections::VecDeque;

use super::board::Board;
use super::types::Mark;

pub const MAX_HISTORY_ENTRIES: usize = 100;

/// Board plus the mark that is to move on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub player: Mark,
}

impl Snapshot {
    pub fn new(board: Board, player: Mark) -> Self {
        Self { board, player }
    }
}

/// Linear undo log with a redo stack. The newest entry is the current position.
#[derive(Debug)]
pub struct History {
    entries: VecDeque<Snapshot>,
    redo: Vec<Snapshot>,
    capacity: usize,
}

impl History {
    pub fn new(initial: Snapshot) -> Self {
        Self::with_capacity(initial, MAX_HISTORY_ENTRIES)
    }

    pub fn with_capacity(initial: Snapshot, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut entries = VecDeque::with_capacity(capacity);
        entries.push_back(initial);
        Self {
            entries,
            redo: Vec::new(),
            capacity,
        }
    }

    pub fn reset(&mut self, initial: Snapshot) {
        self.entries.clear();
        self.redo.clear();
        self.entries.push_back(initial);
    }

    /// Appends after a move. Forward progress invalidates the redo stack.
    pub fn record(&mut self, snapshot: Snapshot) {
        self.entries.push_back(snapshot);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        self.redo.clear();
    }

    /// Returns the snapshot to restore, or `None` when only one entry is left.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if self.entries.len() < 2 {
            return None;
        }
        let undone = self.entries.pop_back()?;
        self.redo.push(undone);
        self.entries.back()
    }

    pub fn redo(&mut self) -> Option<&Snapshot> {
        let next = self.redo.pop()?;
        self.entries.push_back(next);
        self.entries.back()
    }

    pub fn can_undo(&self) -> bool {
        self.entries.len() >= 2
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    fn current(&self) -> Option<&Snapshot> {
        self.entries.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with(marks: &[(usize, Mark)], player: Mark) -> Snapshot {
        let mut board = Board::new(3);
        for &(position, mark) in marks {
            board.set(position, mark);
        }
        Snapshot::new(board, player)
    }

    #[test]
    fn test_undo_with_only_initial_is_noop() {
        let initial = snapshot_with(&[], Mark::X);
        let mut history = History::new(initial.clone());
        assert!(history.undo().is_none());
        assert_eq!(history.len(), 1);
        assert_eq!(history.current(), Some(&initial));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_then_redo_returns_same_snapshot() {
        let mut history = History::new(snapshot_with(&[], Mark::X));
        let after_first = snapshot_with(&[(0, Mark::X)], Mark::O);
        history.record(after_first.clone());

        assert_eq!(history.undo(), Some(&snapshot_with(&[], Mark::X)));
        assert!(history.can_redo());
        assert_eq!(history.redo(), Some(&after_first));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = History::new(snapshot_with(&[], Mark::X));
        history.record(snapshot_with(&[(0, Mark::X)], Mark::O));
        history.undo();
        history.record(snapshot_with(&[(4, Mark::X)], Mark::O));
        assert!(!history.can_redo());
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = History::new(snapshot_with(&[], Mark::X));
        for i in 0..150 {
            let player = if i % 2 == 0 { Mark::O } else { Mark::X };
            history.record(snapshot_with(&[(i % 9, Mark::X)], player));
        }
        assert_eq!(history.len(), MAX_HISTORY_ENTRIES);

        let mut undone = 0;
        while history.undo().is_some() {
            undone += 1;
        }
        assert_eq!(undone, MAX_HISTORY_ENTRIES - 1);
        assert_ne!(history.current(), Some(&snapshot_with(&[], Mark::X)));
    }

    #[test]
    fn test_reset_keeps_only_initial() {
        let mut history = History::new(snapshot_with(&[], Mark::X));
        history.record(snapshot_with(&[(0, Mark::X)], Mark::O));
        history.undo();
        history.reset(snapshot_with(&[], Mark::X));
        assert_eq!(history.len(), 1);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
