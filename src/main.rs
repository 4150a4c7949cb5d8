// Clinic Desk Application
// Main entry point

use clinic_desk::services::settings::{load_settings_or_default, resolve_config_path};
use clinic_desk::ui_egui::ClinicApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Clinic Desk");

    let config_path = resolve_config_path();
    let settings = load_settings_or_default(&config_path);
    log::info!(
        "Using config {} (view={}, window={}:00-{}:00, theme={})",
        config_path.display(),
        settings.default_view,
        settings.window_start_hour,
        settings.window_end_hour,
        settings.theme
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Clinic Desk"),
        ..Default::default()
    };

    eframe::run_native(
        "Clinic Desk",
        options,
        Box::new(move |cc| Ok(Box::new(ClinicApp::new(cc, settings, config_path)))),
    )
}
