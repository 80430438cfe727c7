use crate::document::Snapshot;

/// Linear undo/redo history of document snapshots.
///
/// `past` always holds at least the initial state, and its last entry is
/// the state the document is currently in. Recording a new state discards
/// everything that could have been redone.
#[derive(Debug, Clone)]
pub struct History {
    past: Vec<Snapshot>,
    future: Vec<Snapshot>,
}

impl History {
    /// Creates a history whose floor is `initial`.
    pub fn new(initial: Snapshot) -> Self {
        Self {
            past: vec![initial],
            future: Vec::new(),
        }
    }

    /// Records the state after a completed mutation.
    pub fn record(&mut self, snapshot: Snapshot) {
        self.past.push(snapshot);
        self.future.clear();
    }

    /// Steps back one state and returns the state to restore.
    ///
    /// Returns `None` when only the initial state is left.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if self.past.len() <= 1 {
            return None;
        }
        let undone = self.past.pop()?;
        self.future.push(undone);
        self.past.last()
    }

    /// Re-applies the most recently undone state and returns it.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        let redone = self.future.pop()?;
        self.past.push(redone);
        self.past.last()
    }

    /// The state the document should currently be in.
    pub fn current(&self) -> Option<&Snapshot> {
        self.past.last()
    }

    pub fn can_undo(&self) -> bool {
        self.past.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    pub fn future_len(&self) -> usize {
        self.future.len()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Snapshot::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::stroke::Stroke;
    use egui::{Color32, Pos2};

    fn doc_with(n: usize) -> Document {
        let mut doc = Document::new();
        for i in 0..n {
            let stroke = Stroke::new(Color32::BLACK, 1.0, vec![Pos2::new(i as f32, 0.0)]).unwrap();
            doc.append(stroke);
        }
        doc
    }

    #[test]
    fn undo_floor_is_initial_state() {
        let mut history = History::default();
        assert!(history.undo().is_none());
        assert_eq!(history.past_len(), 1);
        assert_eq!(history.future_len(), 0);
    }

    #[test]
    fn undo_returns_previous_state() {
        let mut history = History::default();
        history.record(doc_with(1).snapshot());
        history.record(doc_with(2).snapshot());

        assert_eq!(history.undo().map(Snapshot::len), Some(1));
        assert_eq!(history.undo().map(Snapshot::len), Some(0));
        assert!(history.undo().is_none());
        assert_eq!(history.future_len(), 2);
    }

    #[test]
    fn redo_walks_forward_again() {
        let mut history = History::default();
        history.record(doc_with(1).snapshot());
        history.undo();

        assert!(history.can_redo());
        assert_eq!(history.redo().map(Snapshot::len), Some(1));
        assert!(history.redo().is_none());
        assert_eq!(history.current().map(Snapshot::len), Some(1));
    }

    #[test]
    fn record_discards_future() {
        let mut history = History::default();
        history.record(doc_with(1).snapshot());
        history.record(doc_with(2).snapshot());
        history.undo();
        history.undo();
        assert_eq!(history.future_len(), 2);

        history.record(doc_with(5).snapshot());
        assert_eq!(history.future_len(), 0);
        assert!(!history.can_redo());
        assert_eq!(history.current().map(Snapshot::len), Some(5));
    }
}
