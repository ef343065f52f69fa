/**
 * Liggs Desktop - Main Entry Point
 *
 * Loads configuration, installs the tracing subscriber, and opens the
 * eframe window.
 */
use eframe::egui;
use liggs::egui_app::LiggsApp;
use liggs::shared::AppConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("liggs=info")),
        )
        .init();

    let config = AppConfig::load()?;
    tracing::info!(server = %config.server_url, "starting liggs");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Liggs",
        options,
        Box::new(move |cc| Ok(Box::new(LiggsApp::new(cc, config)?))),
    )?;
    Ok(())
}
