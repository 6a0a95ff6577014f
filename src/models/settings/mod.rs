// Settings module
// Application configuration read from config.toml

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::session::UserSession;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// SQLite database file; resolved from the data dir when unset
    pub database_path: Option<PathBuf>,
    /// Signed-in user. `None` means nobody is signed in.
    pub user_id: Option<i64>,
    pub display_name: Option<String>,
    /// Mirror toasts as desktop notifications
    pub desktop_notifications: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_path: None,
            user_id: None,
            display_name: None,
            desktop_notifications: false,
        }
    }
}

impl Settings {
    /// Session for the configured user, if any.
    pub fn session(&self) -> Option<UserSession> {
        self.user_id.map(|id| UserSession {
            user_id: id,
            display_name: self.display_name.clone(),
        })
    }
}
