use crate::stroke::Stroke;

/// The committed strokes of the board, in draw order.
///
/// Later strokes paint over earlier ones, which is also how the eraser
/// works: it is a stroke in the background color.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    strokes: Vec<Stroke>,
}

/// An immutable copy of a document's strokes at one point in time.
///
/// Snapshots own their strokes outright, so later edits to the live
/// document never reach a stored snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    strokes: Vec<Stroke>,
}

impl Snapshot {
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            strokes: self.strokes.clone(),
        }
    }

    /// Replaces the live strokes with a copy of `snapshot`.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.strokes.clone_from(&snapshot.strokes);
    }
}
