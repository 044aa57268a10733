mod app;
mod chart;
mod color;
mod config;
mod data;
mod error;
mod session;
mod state;
mod ui;

use anyhow::anyhow;
use app::DataVisualizerApp;
use config::Config;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::load()?;
    log::info!("Reading data from {}", config.data_dir.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 900.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Data Visualizer",
        options,
        Box::new(|_cc| Ok(Box::new(DataVisualizerApp::new(config)))),
    )
    .map_err(|e| anyhow!("running the UI: {e}"))
}
