//! The whiteboard core: view, gesture state, strokes and history, driven by
//! [`InputEvent`]s or by calling the operations directly.
//!
//! Every completed mutation (a committed stroke or a clear) records exactly
//! one history entry, so the newest history entry always matches the
//! document. Pointer samples inside a stroke are never recorded on their own.

use egui::{Color32, PointerButton, Pos2};

use crate::config::WhiteboardConfig;
use crate::document::Document;
use crate::error::{Result, WhiteboardError};
use crate::history::History;
use crate::input::InputEvent;
use crate::state::EditorState;
use crate::stroke::StrokeBuilder;
use crate::tool::ToolSettings;
use crate::transform::{ViewTransform, ZoomDirection};

#[derive(Debug)]
pub struct Editor {
    view: ViewTransform,
    state: EditorState,
    document: Document,
    history: History,
    tools: ToolSettings,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(ViewTransform::default(), ToolSettings::default())
    }
}

impl Editor {
    /// Creates an empty board. The empty document is the floor of the undo history.
    pub fn new(view: ViewTransform, tools: ToolSettings) -> Self {
        let document = Document::new();
        let history = History::new(document.snapshot());
        Self {
            view,
            state: EditorState::Idle,
            document,
            history,
            tools,
        }
    }

    pub fn from_config(config: &WhiteboardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.view_transform()?, ToolSettings::from_config(config)?))
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tools(&self) -> &ToolSettings {
        &self.tools
    }

    pub fn tools_mut(&mut self) -> &mut ToolSettings {
        &mut self.tools
    }

    /// Starts a stroke at `screen` with the active tool's color and width.
    pub fn begin_stroke(&mut self, screen: Pos2) -> Result<()> {
        let (color, width) = self.tools.active_style();
        self.begin_stroke_with(screen, color, width)
    }

    pub fn begin_stroke_with(&mut self, screen: Pos2, color: Color32, width: f32) -> Result<()> {
        self.expect_idle("begin a stroke")?;
        let builder = StrokeBuilder::begin(&self.view, screen, color, width)?;
        self.state = EditorState::Drawing(builder);
        Ok(())
    }

    pub fn extend_stroke(&mut self, screen: Pos2) -> Result<()> {
        match &mut self.state {
            EditorState::Drawing(builder) => {
                builder.extend(&self.view, screen);
                Ok(())
            }
            other => Err(WhiteboardError::InvalidTransition {
                from: other.name(),
                action: "extend a stroke",
            }),
        }
    }

    /// Finishes the open stroke, adds it to the document and records the new state.
    pub fn commit_stroke(&mut self) -> Result<()> {
        match std::mem::take(&mut self.state) {
            EditorState::Drawing(builder) => {
                let stroke = builder.commit();
                log::debug!("Committed stroke with {} points", stroke.points().len());
                self.document.append(stroke);
                self.history.record(self.document.snapshot());
                Ok(())
            }
            other => {
                let from = other.name();
                self.state = other;
                Err(WhiteboardError::InvalidTransition {
                    from,
                    action: "commit a stroke",
                })
            }
        }
    }

    pub fn begin_pan(&mut self, screen: Pos2) -> Result<()> {
        self.expect_idle("begin panning")?;
        self.state = EditorState::Panning(self.view.begin_pan(screen));
        Ok(())
    }

    pub fn pan_to(&mut self, screen: Pos2) -> Result<()> {
        match &self.state {
            EditorState::Panning(anchor) => {
                self.view.pan_to(*anchor, screen);
                Ok(())
            }
            other => Err(WhiteboardError::InvalidTransition {
                from: other.name(),
                action: "pan",
            }),
        }
    }

    pub fn end_pan(&mut self) -> Result<()> {
        if !matches!(self.state, EditorState::Panning(_)) {
            return Err(WhiteboardError::InvalidTransition {
                from: self.state.name(),
                action: "end a pan",
            });
        }
        self.state = EditorState::Idle;
        Ok(())
    }

    /// One zoom step anchored at `screen`. Returns whether the view changed.
    pub fn zoom_at(&mut self, screen: Pos2, direction: ZoomDirection) -> bool {
        self.view.zoom_at(screen, direction)
    }

    /// Removes every stroke. Always records a history entry, even for an empty board.
    pub fn clear(&mut self) {
        self.document.clear();
        self.history.record(self.document.snapshot());
        log::debug!("Board cleared, {} states in history", self.history.past_len());
    }

    /// Returns whether anything was undone.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.document.restore(snapshot);
                log::debug!("Undo: {} strokes", self.document.len());
                true
            }
            None => {
                log::debug!("Nothing to undo");
                false
            }
        }
    }

    /// Returns whether anything was redone.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.document.restore(snapshot);
                log::debug!("Redo: {} strokes", self.document.len());
                true
            }
            None => {
                log::debug!("Nothing to redo");
                false
            }
        }
    }

    /// Dispatches one input event. Returns whether the frame needs redrawing.
    ///
    /// Events that break the gesture protocol (a press while another gesture
    /// runs) are logged and dropped.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        let result = match event {
            InputEvent::PointerDown { pos, button } => match button {
                PointerButton::Primary => self.begin_stroke(pos).map(|()| true),
                PointerButton::Middle => self.begin_pan(pos).map(|()| false),
                _ => Ok(false),
            },
            InputEvent::PointerMove { pos } => match self.state {
                EditorState::Drawing(_) => self.extend_stroke(pos).map(|()| true),
                EditorState::Panning(_) => self.pan_to(pos).map(|()| true),
                EditorState::Idle => Ok(false),
            },
            InputEvent::PointerUp { button, .. } => {
                // Only the button that started the gesture ends it.
                let drawing = matches!(self.state, EditorState::Drawing(_));
                let panning = matches!(self.state, EditorState::Panning(_));
                match button {
                    PointerButton::Primary if drawing => self.commit_stroke().map(|()| true),
                    PointerButton::Middle if panning => self.end_pan().map(|()| false),
                    _ => Ok(false),
                }
            }
            InputEvent::Wheel { pos, delta_y } => Ok(ZoomDirection::from_scroll_delta(delta_y)
                .is_some_and(|direction| self.zoom_at(pos, direction))),
            InputEvent::Undo => Ok(self.undo()),
            InputEvent::Redo => Ok(self.redo()),
            InputEvent::Clear => {
                self.clear();
                Ok(true)
            }
        };

        result.unwrap_or_else(|err| {
            log::warn!("Ignored {event:?}: {err}");
            false
        })
    }

    fn expect_idle(&self, action: &'static str) -> Result<()> {
        if self.state.is_idle() {
            Ok(())
        } else {
            Err(WhiteboardError::InvalidTransition {
                from: self.state.name(),
                action,
            })
        }
    }
}
