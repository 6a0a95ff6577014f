//! Loads and stores `config.toml`.

use crate::models::settings::Settings;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Overrides the config file location when set.
pub const CONFIG_ENV_VAR: &str = "ACADEMIC_PLANNER_CONFIG";

const CONFIG_FILE_NAME: &str = "config.toml";
const DATABASE_FILE_NAME: &str = "academic.db";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "KenBoyle", "AcademicPlanner")
}

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Config file from `ACADEMIC_PLANNER_CONFIG`, else the platform config dir,
    /// else `config.toml` in the working directory.
    pub fn from_environment() -> Self {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            if !path.trim().is_empty() {
                return Self::new(path);
            }
        }

        match project_dirs() {
            Some(dirs) => Self::new(dirs.config_dir().join(CONFIG_FILE_NAME)),
            None => Self::new(CONFIG_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read settings. A missing file yields defaults.
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }

        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        toml::from_str(&raw).with_context(|| format!("Failed to parse {}", self.path.display()))
    }

    /// Read settings, falling back to defaults on any error.
    pub fn load_or_default(&self) -> Settings {
        match self.load() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings: {:#}, using defaults", e);
                Settings::default()
            }
        }
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let raw = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        std::fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}

/// Database file for `settings`: the configured path, else the platform data
/// dir in release builds, else `academic.db` in the working directory.
pub fn resolve_database_path(settings: &Settings) -> PathBuf {
    if let Some(path) = &settings.database_path {
        return path.clone();
    }

    #[cfg(debug_assertions)]
    {
        PathBuf::from(DATABASE_FILE_NAME)
    }

    #[cfg(not(debug_assertions))]
    {
        match project_dirs() {
            Some(dirs) => dirs.data_dir().join(DATABASE_FILE_NAME),
            None => PathBuf::from(DATABASE_FILE_NAME),
        }
    }
}
