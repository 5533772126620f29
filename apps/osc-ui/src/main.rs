#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod plot_view;

use app::OscillatorApp;
use std::path::PathBuf;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let scenario_path = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 650.0])
            .with_title("Oscillator"),
        ..Default::default()
    };

    eframe::run_native(
        "Oscillator",
        options,
        Box::new(|cc| Ok(Box::new(OscillatorApp::new(cc, scenario_path)))),
    )
}
