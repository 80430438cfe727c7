#![warn(clippy::all, rust_2018_idioms)]

use eframe_whiteboard::{WhiteboardApp, WhiteboardConfig};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = WhiteboardConfig::from_env();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([320.0, 240.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Whiteboard",
        native_options,
        Box::new(move |cc| Ok(Box::new(WhiteboardApp::new(cc, &config)))),
    )
}
