//! Data Structure Visualizer - Main Entry Point
//!
//! Opens a window showing an animated linked list, binary search tree and
//! bounded array that the user manipulates one operation at a time.

use dsvis_rs::{
    config::{ensure_app_data_dir, AppState, VisConfig},
    frontend::VisualizerApp,
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Console logging plus a daily log file in the app data directory.
///
/// The returned guard flushes the file writer when dropped.
fn init_logging() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,dsvis_rs=debug"));

    let (file_layer, guard, dir_error) = match ensure_app_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "dsvis.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard), None)
        }
        Err(e) => (None, None, Some(e)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .init();

    if let Some(e) = dir_error {
        tracing::warn!("File logging disabled: {}", e);
    }
    guard
}

fn main() -> eframe::Result<()> {
    let _log_guard = init_logging();

    tracing::info!("Starting Data Structure Visualizer");

    let config = VisConfig::load_or_default();
    let app_state = AppState::load_or_default();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Data Structure Visualizer"),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Data Structure Visualizer",
        native_options,
        Box::new(|cc| Ok(Box::new(VisualizerApp::new(cc, config, app_state)))),
    );

    tracing::info!("Shutting down...");
    result
}
