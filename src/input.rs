use egui::{Context, Event, Key, Modifiers, PointerButton, Pos2, Rect};

/// Input the editor reacts to.
///
/// Pointer positions are in canvas screen space: pixels relative to the
/// top-left corner of the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary starts a stroke, middle starts a pan.
    PointerDown { pos: Pos2, button: PointerButton },
    PointerMove { pos: Pos2 },
    PointerUp { pos: Pos2, button: PointerButton },
    /// One wheel tick. Only the sign of `delta_y` is used.
    Wheel { pos: Pos2, delta_y: f32 },
    Undo,
    Redo,
    Clear,
}

/// Converts raw egui input for the canvas into [`InputEvent`]s.
#[derive(Debug, Default)]
pub struct InputHandler {
    /// Last pointer position seen, canvas-relative.
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_pointer_pos(&self) -> Option<Pos2> {
        self.last_pointer_pos
    }

    /// Collects this frame's events for a canvas occupying `canvas`.
    ///
    /// Raw events are walked in the order they arrived, so every pointer
    /// sample between two frames reaches the editor at its own position.
    /// Presses and wheel ticks only count over the canvas. Releases always
    /// count, so a gesture that leaves the canvas still ends.
    pub fn process_input(&mut self, ctx: &Context, canvas: Rect) -> Vec<InputEvent> {
        let origin = canvas.min.to_vec2();

        ctx.input(|input| {
            let mut events = Vec::new();
            for event in &input.events {
                match event {
                    Event::PointerMoved(screen_pos) => {
                        let pos = *screen_pos - origin;
                        if self.last_pointer_pos != Some(pos) {
                            events.push(InputEvent::PointerMove { pos });
                            self.last_pointer_pos = Some(pos);
                        }
                    }
                    Event::PointerButton {
                        pos: screen_pos,
                        button,
                        pressed,
                        ..
                    } => {
                        let pos = *screen_pos - origin;
                        self.last_pointer_pos = Some(pos);
                        if !*pressed {
                            events.push(InputEvent::PointerUp { pos, button: *button });
                        } else if canvas.contains(*screen_pos) {
                            events.push(InputEvent::PointerDown { pos, button: *button });
                        }
                    }
                    Event::MouseWheel { delta, .. } if delta.y != 0.0 => {
                        if let Some(pos) = self.last_pointer_pos {
                            if canvas.contains(pos + origin) {
                                events.push(InputEvent::Wheel { pos, delta_y: delta.y });
                            }
                        }
                    }
                    Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } => {
                        if let Some(action) = shortcut(*key, *modifiers) {
                            events.push(action);
                        }
                    }
                    _ => {}
                }
            }
            events
        })
    }
}

// Ctrl+Z / Ctrl+Y with no other modifier held.
fn shortcut(key: Key, modifiers: Modifiers) -> Option<InputEvent> {
    if !modifiers.command || modifiers.shift || modifiers.alt {
        return None;
    }
    match key {
        Key::Z => Some(InputEvent::Undo),
        Key::Y => Some(InputEvent::Redo),
        _ => None,
    }
}
