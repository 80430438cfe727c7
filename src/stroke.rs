use egui::{Color32, Pos2, Rect};

use crate::error::{Result, WhiteboardError};
use crate::transform::ViewTransform;

/// A finished pen or eraser stroke.
///
/// Points are in logical space, in the order they were sampled. The stroke
/// holds the raw samples only; smoothing happens at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    color: Color32,
    width: f32,
    points: Vec<Pos2>,
}

impl Stroke {
    pub fn new(color: Color32, width: f32, points: Vec<Pos2>) -> Result<Self> {
        validate_width(width)?;
        if points.is_empty() {
            return Err(WhiteboardError::EmptyStroke);
        }
        Ok(Self {
            color,
            width,
            points,
        })
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    /// Logical-space bounding box of the sampled points, not including line width.
    pub fn bounds(&self) -> Rect {
        Rect::from_points(&self.points)
    }
}

fn validate_width(width: f32) -> Result<()> {
    if width.is_finite() && width > 0.0 {
        Ok(())
    } else {
        Err(WhiteboardError::InvalidWidth(width))
    }
}

/// Accumulates pointer samples for the stroke currently being drawn.
///
/// A builder only exists while a stroke is open, so it always holds at
/// least one point.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeBuilder {
    color: Color32,
    width: f32,
    points: Vec<Pos2>,
}

impl StrokeBuilder {
    /// Opens a stroke at the screen position `screen`.
    pub fn begin(view: &ViewTransform, screen: Pos2, color: Color32, width: f32) -> Result<Self> {
        validate_width(width)?;
        Ok(Self {
            color,
            width,
            points: vec![view.screen_to_logical(screen)],
        })
    }

    /// Appends the logical point under `screen`.
    pub fn extend(&mut self, view: &ViewTransform, screen: Pos2) {
        self.points.push(view.screen_to_logical(screen));
    }

    /// Closes the stroke.
    pub fn commit(self) -> Stroke {
        Stroke {
            color: self.color,
            width: self.width,
            points: self.points,
        }
    }

    // Preview accessors for rendering the open stroke
    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}
