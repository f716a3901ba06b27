// Rental Scheduler desktop client
// Main entry point

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use rental_scheduler::services::api::{HttpSchedulerApi, StaticCsrfToken};
use rental_scheduler::services::settings::SettingsService;
use rental_scheduler::ui_egui::SchedulerApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Rental Scheduler client");

    let settings_service = SettingsService::from_project_dirs()?;
    let settings = settings_service.get_or_default();
    log::info!(
        "Using server {} (settings at {})",
        settings.server_url,
        settings_service.path().display()
    );

    let csrf = Arc::new(StaticCsrfToken::new(settings.csrf_token.clone()));
    let api = HttpSchedulerApi::from_settings(&settings, csrf)
        .context("Failed to set up the scheduler API client")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Rental Scheduler")
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rental Scheduler",
        options,
        Box::new(move |cc| {
            Ok(Box::new(SchedulerApp::new(
                cc,
                settings,
                settings_service,
                Arc::new(api),
            )))
        }),
    )
    .map_err(|err| anyhow!("UI error: {}", err))
}
