use egui::epaint::QuadraticBezierShape;
use egui::{Color32, Pos2, Rect, Shape, Vec2};

use crate::document::Document;
use crate::stroke::StrokeBuilder;
use crate::transform::ViewTransform;

/// Maximum distance, in screen pixels, between a curve and its flattened polyline.
const FLATTEN_TOLERANCE: f32 = 0.25;

/// One drawing command of a stroke outline, in logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Pos2),
    QuadTo { ctrl: Pos2, to: Pos2 },
    LineTo(Pos2),
}

/// The smoothed outline of a stroke, ready to paint.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePath {
    segments: Vec<PathSegment>,
    color: Color32,
    /// Line width in logical units. Multiplying by the view scale gives back
    /// the stroke's nominal width, so strokes look equally thick at any zoom.
    line_width: f32,
}

impl StrokePath {
    pub fn new(points: &[Pos2], color: Color32, width: f32, view: &ViewTransform) -> Self {
        Self {
            segments: smooth_segments(points),
            color,
            line_width: width / view.scale(),
        }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    /// Flattens the path into screen-space points for a canvas whose top-left is `origin`.
    pub fn screen_polyline(&self, view: &ViewTransform, origin: Vec2) -> Vec<Pos2> {
        let to_screen = |p: Pos2| view.logical_to_screen(p) + origin;
        let mut polyline = Vec::new();
        let mut cursor: Option<Pos2> = None;

        for segment in &self.segments {
            match *segment {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => {
                    polyline.push(to_screen(p));
                    cursor = Some(p);
                }
                PathSegment::QuadTo { ctrl, to } => {
                    if let Some(from) = cursor {
                        let curve = QuadraticBezierShape::from_points_stroke(
                            [to_screen(from), to_screen(ctrl), to_screen(to)],
                            false,
                            Color32::TRANSPARENT,
                            egui::Stroke::NONE,
                        );
                        // The first flattened point repeats the current pen position.
                        polyline.extend(curve.flatten(Some(FLATTEN_TOLERANCE)).into_iter().skip(1));
                    }
                    cursor = Some(to);
                }
            }
        }
        polyline
    }

    /// Paint commands for this path: the line plus round caps at both ends.
    fn shapes(&self, view: &ViewTransform, origin: Vec2, out: &mut Vec<Shape>) {
        let polyline = self.screen_polyline(view, origin);
        let width = self.line_width * view.scale();
        let radius = width / 2.0;

        match polyline.as_slice() {
            [] => {}
            [dot] => out.push(Shape::circle_filled(*dot, radius, self.color)),
            [first, .., last] => {
                let (first, last) = (*first, *last);
                out.push(Shape::line(polyline, egui::Stroke::new(width, self.color)));
                out.push(Shape::circle_filled(first, radius, self.color));
                out.push(Shape::circle_filled(last, radius, self.color));
            }
        }
    }
}

/// Midpoint quadratic smoothing.
///
/// Each sample after the first adds a quadratic curve controlled by the
/// previous sample and ending halfway to the new one. A closing straight
/// segment makes the outline end exactly on the last sample.
pub fn smooth_segments(points: &[Pos2]) -> Vec<PathSegment> {
    let Some((&first, rest)) = points.split_first() else {
        return Vec::new();
    };

    let mut segments = Vec::with_capacity(points.len() + 1);
    segments.push(PathSegment::MoveTo(first));

    let mut prev = first;
    for &point in rest {
        let mid = Pos2::new((prev.x + point.x) / 2.0, (prev.y + point.y) / 2.0);
        segments.push(PathSegment::QuadTo { ctrl: prev, to: mid });
        prev = point;
    }
    if !rest.is_empty() {
        segments.push(PathSegment::LineTo(prev));
    }
    segments
}

/// Draws whole frames of the board.
///
/// Holds no drawing state of its own: every frame is derived from the
/// document, the open stroke and the view passed in.
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
}

impl Renderer {
    pub fn new(background: Color32) -> Self {
        Self { background }
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Builds the paint commands for one frame.
    ///
    /// Args:
    ///     document: committed strokes, painted in insertion order
    ///     open_stroke: the stroke being drawn, painted last
    ///     view: the current pan/zoom
    ///     viewport: the canvas rectangle in egui screen coordinates
    pub fn frame_shapes(
        &self,
        document: &Document,
        open_stroke: Option<&StrokeBuilder>,
        view: &ViewTransform,
        viewport: Rect,
    ) -> Vec<Shape> {
        let origin = viewport.min.to_vec2();
        let visible = view.visible_logical_rect(viewport.size());

        let mut shapes = vec![Shape::rect_filled(viewport, 0.0, self.background)];

        let committed = document
            .strokes()
            .iter()
            .map(|stroke| (stroke.points(), stroke.color(), stroke.width()));
        let open = open_stroke.map(|builder| (builder.points(), builder.color(), builder.width()));

        for (points, color, width) in committed.chain(open) {
            let path = StrokePath::new(points, color, width, view);
            let bounds = Rect::from_points(points).expand(path.line_width());
            if !bounds.intersects(visible) {
                continue;
            }
            path.shapes(view, origin, &mut shapes);
        }
        shapes
    }

    /// Paints one frame onto `painter`.
    pub fn render(
        &self,
        painter: &egui::Painter,
        document: &Document,
        open_stroke: Option<&StrokeBuilder>,
        view: &ViewTransform,
        viewport: Rect,
    ) {
        painter.extend(self.frame_shapes(document, open_stroke, view, viewport));
    }
}
