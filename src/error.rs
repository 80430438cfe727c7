use thiserror::Error;

/// Errors raised by the whiteboard core.
///
/// Zoom requests at the scale bounds and undo/redo at the ends of the
/// history are not errors; they simply report "no change".
#[derive(Debug, Error)]
pub enum WhiteboardError {
    /// A gesture operation was invoked from a state that does not allow it,
    /// e.g. extending a stroke while nothing is being drawn.
    #[error("cannot {action} while {from}")]
    InvalidTransition {
        from: &'static str,
        action: &'static str,
    },
    #[error("stroke width must be positive and finite, got {0}")]
    InvalidWidth(f32),
    #[error("a stroke needs at least one point")]
    EmptyStroke,
    #[error("invalid color spec {0:?}")]
    InvalidColor(String),
    #[error("invalid zoom limits: min {min}, max {max}")]
    InvalidZoomLimits { min: f32, max: f32 },
    #[error("invalid zoom step {0}, expected a value in (0, 1)")]
    InvalidZoomStep(f32),
    #[error("failed to read config: {0}")]
    ConfigIo(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WhiteboardError>;
