#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod document;
pub mod editor;
pub mod error;
pub mod history;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod stroke;
pub mod tool;
pub mod transform;

pub use app::WhiteboardApp;
pub use config::WhiteboardConfig;
pub use document::{Document, Snapshot};
pub use editor::Editor;
pub use error::{Result, WhiteboardError};
pub use history::History;
pub use input::{InputEvent, InputHandler};
pub use renderer::Renderer;
pub use state::EditorState;
pub use stroke::{Stroke, StrokeBuilder};
pub use tool::{Tool, ToolSettings};
pub use transform::{ViewTransform, ZoomDirection, ZoomLimits};
