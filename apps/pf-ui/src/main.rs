#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod curve_cache;
mod views;

use std::path::PathBuf;

use app::ParafitApp;
use pf_app::{AppResult, Session, SessionConfig, load_config};
use tracing::error;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let session = start_session(std::env::args_os().nth(1).map(PathBuf::from))
        .map_err(|e| eframe::Error::AppCreation(Box::new(e)))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_title("Parafit"),
        ..Default::default()
    };

    eframe::run_native(
        "Parafit",
        options,
        Box::new(|cc| Ok(Box::new(ParafitApp::new(cc, session)))),
    )
}

/// Session from the optional config path, falling back to the built-in points
/// when the file is unreadable or its points are degenerate.
fn start_session(config_path: Option<PathBuf>) -> AppResult<Session> {
    let config = match config_path {
        Some(path) => load_config(&path).unwrap_or_else(|e| {
            error!(path = %path.display(), error = %e, "failed to load session config");
            SessionConfig::default()
        }),
        None => SessionConfig::default(),
    };

    Session::new(&config).or_else(|e| {
        error!(error = %e, "initial points rejected, using the built-in points");
        Session::new(&SessionConfig::with_preset(config.preset))
    })
}
