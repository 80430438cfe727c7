use egui::Color32;

use crate::config::{WhiteboardConfig, parse_color};
use crate::error::{Result, WhiteboardError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Pen,
    /// Paints with the background color; nothing is actually removed.
    Eraser,
}

impl Tool {
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Pen => "Pen",
            Tool::Eraser => "Eraser",
        }
    }
}

/// Pen and eraser settings chosen in the toolbar.
///
/// The editor reads [`ToolSettings::active_style`] once per stroke, when
/// the stroke begins.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSettings {
    tool: Tool,
    pen_color: Color32,
    pen_width: f32,
    eraser_width: f32,
    background: Color32,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            tool: Tool::Pen,
            pen_color: Color32::BLACK,
            pen_width: 5.0,
            eraser_width: 10.0,
            background: Color32::from_rgb(0xf0, 0xf0, 0xf0),
        }
    }
}

impl ToolSettings {
    pub fn from_config(config: &WhiteboardConfig) -> Result<Self> {
        let mut settings = Self {
            tool: Tool::Pen,
            pen_color: parse_color(&config.pen_color)?,
            background: parse_color(&config.background_color)?,
            ..Self::default()
        };
        settings.set_pen_width(config.pen_width)?;
        settings.set_eraser_width(config.eraser_width)?;
        Ok(settings)
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            log::debug!("Tool changed: {} -> {}", self.tool.name(), tool.name());
            self.tool = tool;
        }
    }

    /// Switches between pen and eraser. Pen color and width are untouched,
    /// so switching back restores them.
    pub fn toggle_eraser(&mut self) {
        self.set_tool(match self.tool {
            Tool::Pen => Tool::Eraser,
            Tool::Eraser => Tool::Pen,
        });
    }

    pub fn is_eraser(&self) -> bool {
        self.tool == Tool::Eraser
    }

    /// The (color, width) pair a stroke begun now would use.
    pub fn active_style(&self) -> (Color32, f32) {
        match self.tool {
            Tool::Pen => (self.pen_color, self.pen_width),
            Tool::Eraser => (self.background, self.eraser_width),
        }
    }

    pub fn pen_color(&self) -> Color32 {
        self.pen_color
    }

    pub fn set_pen_color(&mut self, color: Color32) {
        self.pen_color = color;
    }

    pub fn pen_width(&self) -> f32 {
        self.pen_width
    }

    pub fn set_pen_width(&mut self, width: f32) -> Result<()> {
        self.pen_width = checked_width(width)?;
        Ok(())
    }

    pub fn eraser_width(&self) -> f32 {
        self.eraser_width
    }

    pub fn set_eraser_width(&mut self, width: f32) -> Result<()> {
        self.eraser_width = checked_width(width)?;
        Ok(())
    }

    pub fn background(&self) -> Color32 {
        self.background
    }
}

fn checked_width(width: f32) -> Result<f32> {
    if width.is_finite() && width > 0.0 {
        Ok(width)
    } else {
        Err(WhiteboardError::InvalidWidth(width))
    }
}
