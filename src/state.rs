use crate::stroke::StrokeBuilder;
use crate::transform::PanAnchor;

/// The gesture in progress. At most one gesture runs at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditorState {
    #[default]
    Idle,
    Drawing(StrokeBuilder),
    Panning(PanAnchor),
}

impl EditorState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Drawing(_) => "drawing",
            Self::Panning(_) => "panning",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The open stroke, for previewing it before it is committed.
    pub fn open_stroke(&self) -> Option<&StrokeBuilder> {
        match self {
            Self::Drawing(builder) => Some(builder),
            _ => None,
        }
    }
}
