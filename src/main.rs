mod app;
mod color;
mod data;
mod export;
mod prefs;
mod snapshot;
mod state;
mod ui;
mod view;

use app::ClassPulseApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // Register the bundled chart font up front so a failure surfaces here
    // rather than at the first PDF export.
    if let Err(e) = snapshot::register_fonts() {
        log::warn!("Chart font unavailable, PDF export will fail: {e}");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 840.0])
            .with_min_inner_size([800.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "ClassPulse – Student Performance",
        options,
        Box::new(|cc| Ok(Box::new(ClassPulseApp::new(cc)))),
    )
}
