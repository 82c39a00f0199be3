#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use blackboard::BlackboardApp;

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([460.0, 420.0])
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "Blackboard Drawing",
        native_options,
        Box::new(|cc| Ok(Box::new(BlackboardApp::new(cc)))),
    )
}
