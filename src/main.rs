// src/main.rs
use anyhow::Result;
use eframe::egui;

mod api;
mod app;
mod markdown;
mod report;
mod settings;
mod state;
mod ui;

use app::FinAgentApp;
use settings::Settings;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("finagent_gui=info")),
        )
        .init();

    let settings = Settings::load()?;
    tracing::info!(api_url = %settings.api_url, "starting FinAgent dashboard");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("FinAgent"),
        ..Default::default()
    };

    eframe::run_native(
        "FinAgent",
        options,
        Box::new(move |cc| Box::new(FinAgentApp::new(cc, settings))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
