use crate::config::WhiteboardConfig;
use crate::editor::Editor;
use crate::input::{InputEvent, InputHandler};
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;

/// The eframe application: a toolbar on top of a full-window canvas.
///
/// Nothing is persisted; the board lives only as long as the window.
#[derive(Debug)]
pub struct WhiteboardApp {
    editor: Editor,
    renderer: Renderer,
    input: InputHandler,
}

impl Default for WhiteboardApp {
    fn default() -> Self {
        Self::from_editor(Editor::default())
    }
}

impl WhiteboardApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &WhiteboardConfig) -> Self {
        match Editor::from_config(config) {
            Ok(editor) => Self::from_editor(editor),
            Err(err) => {
                log::error!("Invalid config ({err}), starting with defaults");
                Self::default()
            }
        }
    }

    pub fn from_editor(editor: Editor) -> Self {
        let renderer = Renderer::new(editor.tools().background());
        Self {
            editor,
            renderer,
            input: InputHandler::new(),
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    /// Feeds this frame's canvas input to the editor. Returns whether anything changed.
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) -> bool {
        let events = self.input.process_input(ctx, canvas_rect);
        let mut changed = false;
        for event in events {
            if !matches!(event, InputEvent::PointerMove { .. }) {
                log::trace!("{event:?}");
            }
            changed |= self.editor.handle_event(event);
        }
        changed
    }

    /// Redraws the whole canvas from the document and view.
    pub fn render(&self, painter: &egui::Painter, canvas_rect: egui::Rect) {
        self.renderer.render(
            painter,
            self.editor.document(),
            self.editor.state().open_stroke(),
            self.editor.view(),
            canvas_rect,
        );
    }
}

impl eframe::App for WhiteboardApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
