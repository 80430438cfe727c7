use egui::{Pos2, Rect, Vec2};

use crate::error::{Result, WhiteboardError};

pub const DEFAULT_MIN_SCALE: f32 = 0.2;
pub const DEFAULT_MAX_SCALE: f32 = 5.0;
/// Fraction of the current scale added or removed per wheel tick.
pub const DEFAULT_ZOOM_STEP: f32 = 0.1;

/// Inclusive bounds for the view scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    min: f32,
    max: f32,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_SCALE,
            max: DEFAULT_MAX_SCALE,
        }
    }
}

impl ZoomLimits {
    pub fn new(min: f32, max: f32) -> Result<Self> {
        if !(min.is_finite() && max.is_finite()) || min <= 0.0 || min > max {
            return Err(WhiteboardError::InvalidZoomLimits { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn contains(&self, scale: f32) -> bool {
        (self.min..=self.max).contains(&scale)
    }
}

/// Direction of a single wheel tick. Only the sign of the wheel delta matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// egui reports a positive vertical delta when the wheel rolls away from the user.
    pub fn from_scroll_delta(delta_y: f32) -> Option<Self> {
        if delta_y > 0.0 {
            Some(Self::In)
        } else if delta_y < 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }

    fn sign(self) -> f32 {
        match self {
            Self::In => 1.0,
            Self::Out => -1.0,
        }
    }
}

/// Offset between the pointer and the pan origin, captured when a pan gesture starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanAnchor(Vec2);

/// Pan offset and uniform zoom mapping canvas screen space onto the logical plane.
///
/// `screen = logical * scale + pan`
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTransform {
    pan: Vec2,
    scale: f32,
    limits: ZoomLimits,
    zoom_step: f32,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(ZoomLimits::default(), DEFAULT_ZOOM_STEP)
    }
}

impl ViewTransform {
    /// Creates an identity transform (no pan, scale 1) with the given zoom behaviour.
    pub fn new(limits: ZoomLimits, zoom_step: f32) -> Self {
        Self {
            pan: Vec2::ZERO,
            scale: 1.0,
            limits,
            zoom_step,
        }
    }

    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    pub fn screen_to_logical(&self, screen: Pos2) -> Pos2 {
        ((screen.to_vec2() - self.pan) / self.scale).to_pos2()
    }

    pub fn logical_to_screen(&self, logical: Pos2) -> Pos2 {
        (logical.to_vec2() * self.scale + self.pan).to_pos2()
    }

    /// The logical-space region covered by a viewport of `size` screen pixels.
    pub fn visible_logical_rect(&self, size: Vec2) -> Rect {
        Rect::from_min_max(
            self.screen_to_logical(Pos2::ZERO),
            self.screen_to_logical(size.to_pos2()),
        )
    }

    /// Captures the anchor for a pan gesture starting at `screen`.
    pub fn begin_pan(&self, screen: Pos2) -> PanAnchor {
        PanAnchor(screen.to_vec2() - self.pan)
    }

    /// Moves the view so the logical point grabbed at `begin_pan` sits under `screen`.
    pub fn pan_to(&mut self, anchor: PanAnchor, screen: Pos2) {
        self.pan = screen.to_vec2() - anchor.0;
    }

    /// Zooms one step in `direction`, keeping the logical point under `screen` fixed.
    ///
    /// A step that would leave the zoom limits is rejected as a whole.
    /// Returns whether the view changed.
    pub fn zoom_at(&mut self, screen: Pos2, direction: ZoomDirection) -> bool {
        let new_scale = self.scale + direction.sign() * self.zoom_step * self.scale;
        if !self.limits.contains(new_scale) {
            log::trace!("zoom to {new_scale} rejected, outside {:?}", self.limits);
            return false;
        }

        let anchor = self.screen_to_logical(screen);
        self.scale = new_scale;
        self.pan = screen.to_vec2() - anchor.to_vec2() * self.scale;
        true
    }
}
