use anyhow::{anyhow, Result};
use eframe::CreationContext;
use statement_uploader::app::StatementUploader;
use statement_uploader::config::Config;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = Config::from_env();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([900.0, 650.0])
            .with_min_inner_size([500.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Bank Statement Uploader",
        options,
        Box::new(move |cc: &CreationContext| Box::new(StatementUploader::new(cc, config))),
    )
    .map_err(|e| anyhow!("Failed to start the window: {}", e))
}
