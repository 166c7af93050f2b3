mod config;
mod engine;
mod error;
mod export;
mod types;
mod ui;
mod utils;
mod worker;

use clap::Parser;
use config::Config;
use eframe::egui;
use ui::app::App;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    if let Err(e) = config.validate() {
        log::error!("{e}");
        std::process::exit(2);
    }
    log::info!(
        "starting demo: {} documents required, {}ms per stage",
        config.required_files,
        config.stage_ms
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("원앤위너스 One-Button Miracle")
            .with_inner_size([960.0, 720.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };
    eframe::run_native(
        "One-Button Miracle",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, config)))),
    )
}
