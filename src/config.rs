use std::path::Path;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WhiteboardError};
use crate::transform::{self, ViewTransform, ZoomLimits};

/// Environment variable holding the path of the JSON config file.
pub const CONFIG_ENV_VAR: &str = "WHITEBOARD_CONFIG";

/// Startup settings for the board.
///
/// Every field has a default, so a config file only needs the keys it
/// wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhiteboardConfig {
    /// Canvas color. The eraser paints with it.
    pub background_color: String,
    pub pen_color: String,
    pub pen_width: f32,
    pub eraser_width: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    /// Fraction of the current scale applied per wheel tick.
    pub zoom_step: f32,
}

impl Default for WhiteboardConfig {
    fn default() -> Self {
        Self {
            background_color: "#f0f0f0".to_owned(),
            pen_color: "#000000".to_owned(),
            pen_width: 5.0,
            eraser_width: 10.0,
            min_scale: transform::DEFAULT_MIN_SCALE,
            max_scale: transform::DEFAULT_MAX_SCALE,
            zoom_step: transform::DEFAULT_ZOOM_STEP,
        }
    }
}

impl WhiteboardConfig {
    /// Reads and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file named by [`CONFIG_ENV_VAR`], falling back to defaults
    /// when the variable is unset or the file is unusable.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            log::info!("{CONFIG_ENV_VAR} not set, using default config");
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", Path::new(&path).display());
                config
            }
            Err(err) => {
                log::warn!("Ignoring config {}: {err}", Path::new(&path).display());
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        parse_color(&self.background_color)?;
        parse_color(&self.pen_color)?;
        for width in [self.pen_width, self.eraser_width] {
            if !(width.is_finite() && width > 0.0) {
                return Err(WhiteboardError::InvalidWidth(width));
            }
        }
        self.zoom_limits()?;
        if !(self.zoom_step > 0.0 && self.zoom_step < 1.0) {
            return Err(WhiteboardError::InvalidZoomStep(self.zoom_step));
        }
        Ok(())
    }

    pub fn zoom_limits(&self) -> Result<ZoomLimits> {
        ZoomLimits::new(self.min_scale, self.max_scale)
    }

    /// An identity view using the configured zoom behaviour.
    pub fn view_transform(&self) -> Result<ViewTransform> {
        Ok(ViewTransform::new(self.zoom_limits()?, self.zoom_step))
    }
}

/// Parses a `#rrggbb` or `#rrggbbaa` color spec.
pub fn parse_color(spec: &str) -> Result<Color32> {
    Color32::from_hex(spec.trim()).map_err(|_| WhiteboardError::InvalidColor(spec.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = WhiteboardConfig::default();
        config.validate().unwrap();
        assert_eq!(parse_color(&config.background_color).unwrap(), Color32::from_rgb(0xf0, 0xf0, 0xf0));
        assert_eq!(parse_color(&config.pen_color).unwrap(), Color32::BLACK);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = WhiteboardConfig::from_json(r##"{ "pen_color": "#ff0000", "pen_width": 3 }"##).unwrap();
        assert_eq!(config.pen_color, "#ff0000");
        assert_eq!(config.pen_width, 3.0);
        assert_eq!(config.eraser_width, 10.0);
        assert_eq!(config.max_scale, transform::DEFAULT_MAX_SCALE);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            WhiteboardConfig::from_json(r#"{ "pen_color": "black" }"#),
            Err(WhiteboardError::InvalidColor(_))
        ));
        assert!(matches!(
            WhiteboardConfig::from_json(r#"{ "eraser_width": 0 }"#),
            Err(WhiteboardError::InvalidWidth(_))
        ));
        assert!(matches!(
            WhiteboardConfig::from_json(r#"{ "min_scale": 3, "max_scale": 2 }"#),
            Err(WhiteboardError::InvalidZoomLimits { .. })
        ));
        assert!(matches!(
            WhiteboardConfig::from_json(r#"{ "zoom_step": 1.5 }"#),
            Err(WhiteboardError::InvalidZoomStep(_))
        ));
        assert!(matches!(
            WhiteboardConfig::from_json("{ not json"),
            Err(WhiteboardError::ConfigParse(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            WhiteboardConfig::load("/nonexistent/whiteboard.json"),
            Err(WhiteboardError::ConfigIo(_))
        ));
    }
}
