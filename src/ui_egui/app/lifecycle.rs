use std::path::Path;
use std::sync::Arc;

use super::toast::ToastManager;
use super::AcademicApp;
use crate::models::settings::Settings;
use crate::services::activity::SqliteActivityRepository;
use crate::services::database::Database;
use crate::services::notification::NotificationService;
use crate::services::settings::resolve_database_path;

impl AcademicApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: &Settings) -> Self {
        let session = settings.session();
        if session.is_none() {
            log::warn!("No user_id configured; activities cannot be saved");
        }

        let db_path = resolve_database_path(settings);
        let database = match initialize_database(&db_path) {
            Ok(database) => database,
            Err(e) => {
                log::error!("Failed to open database at {}: {:#}", db_path.display(), e);
                return Self::failed_startup(
                    session,
                    format!("Could not open the database at {}: {}", db_path.display(), e),
                );
            }
        };

        let mut desktop = NotificationService::new();
        desktop.set_enabled(settings.desktop_notifications);
        let toast_manager = ToastManager::new().with_desktop_mirror(desktop);

        let repository = Arc::new(SqliteActivityRepository::from_database(&database));
        Self::with_repository(session, repository, toast_manager)
    }
}

fn initialize_database(path: &Path) -> anyhow::Result<Database> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let db = Database::new(&path.to_string_lossy())?;
    db.initialize_schema()?;
    log::info!("Using database at {}", db.path());
    Ok(db)
}
