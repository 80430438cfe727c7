use egui::color_picker::{Alpha, color_edit_button_srgba};
use egui::{Button, Slider};

use crate::WhiteboardApp;
use crate::tool::Tool;

const WIDTH_RANGE: std::ops::RangeInclusive<f32> = 1.0..=50.0;

pub fn tools_panel(app: &mut WhiteboardApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Clear").clicked() {
                app.editor_mut().clear();
            }

            let can_undo = app.editor().history().can_undo();
            let can_redo = app.editor().history().can_redo();
            if ui.add_enabled(can_undo, Button::new("Undo")).clicked() {
                app.editor_mut().undo();
            }
            if ui.add_enabled(can_redo, Button::new("Redo")).clicked() {
                app.editor_mut().redo();
            }

            ui.separator();
            ui.menu_button("Pen", |ui| pen_menu(app, ui));

            let is_eraser = app.editor().tools().is_eraser();
            if ui.selectable_label(is_eraser, Tool::Eraser.name()).clicked() {
                app.editor_mut().tools_mut().toggle_eraser();
            }
            // Eraser settings are only shown while erasing.
            if is_eraser {
                let mut width = app.editor().tools().eraser_width();
                if ui.add(Slider::new(&mut width, WIDTH_RANGE).text("Eraser width")).changed() {
                    if let Err(err) = app.editor_mut().tools_mut().set_eraser_width(width) {
                        log::warn!("{err}");
                    }
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let view = app.editor().view();
                ui.label(format!("{:.0}%", view.scale() * 100.0));
                ui.separator();
                ui.label(format!("Strokes: {}", app.editor().document().len()));
            });
        });
    });
}

fn pen_menu(app: &mut WhiteboardApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.label("Color:");
        let mut color = app.editor().tools().pen_color();
        if color_edit_button_srgba(ui, &mut color, Alpha::Opaque).changed() {
            app.editor_mut().tools_mut().set_pen_color(color);
        }
    });

    let mut width = app.editor().tools().pen_width();
    if ui.add(Slider::new(&mut width, WIDTH_RANGE).text("Width")).changed() {
        if let Err(err) = app.editor_mut().tools_mut().set_pen_width(width) {
            log::warn!("{err}");
        }
    }
}
