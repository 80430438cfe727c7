use egui::{Color32, CursorIcon, Pos2, Rect, Sense, Shape, Stroke, Vec2};

use crate::WhiteboardApp;
use crate::tool::{Tool, ToolSettings};

pub fn central_panel(app: &mut WhiteboardApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
            let canvas_rect = response.rect;

            if app.handle_input(ctx, canvas_rect) {
                ctx.request_repaint();
            }

            // The whole board is repainted every frame, so a window resize
            // never loses strokes.
            app.render(&painter, canvas_rect);

            if let Some(pos) = response.hover_pos() {
                ctx.set_cursor_icon(CursorIcon::None);
                painter.extend(cursor_shapes(app.editor().tools(), pos));
            }
        });
}

/// The pointer drawn over the canvas: a dot of the pen's color and size,
/// or a dotted square the size of the eraser.
pub fn cursor_shapes(tools: &ToolSettings, pos: Pos2) -> Vec<Shape> {
    match tools.tool() {
        Tool::Pen => vec![Shape::circle_filled(pos, tools.pen_width() / 2.0, tools.pen_color())],
        Tool::Eraser => {
            let rect = Rect::from_center_size(pos, Vec2::splat(tools.eraser_width()));
            let outline = [
                rect.left_top(),
                rect.right_top(),
                rect.right_bottom(),
                rect.left_bottom(),
                rect.left_top(),
            ];
            Shape::dashed_line(&outline, Stroke::new(1.0, Color32::BLACK), 2.0, 2.0)
        }
    }
}
