// Academic Planner Application
// Main entry point

use academic_planner::services::settings::SettingsService;
use academic_planner::ui_egui::AcademicApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Academic Planner");

    let settings_service = SettingsService::from_environment();
    let settings = settings_service.load_or_default();
    if !settings_service.path().exists() {
        match settings_service.save(&settings) {
            Ok(()) => log::info!("Wrote default config to {}", settings_service.path().display()),
            Err(e) => log::warn!("Could not write default config: {:#}", e),
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 540.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Academic Planner",
        options,
        Box::new(move |cc| Ok(Box::new(AcademicApp::new(cc, &settings)))),
    )
}
