//! Persistence boundary used by the activity dialog.
//!
//! The dialog only sees [`ActivityRepository`], so the insert can run on a
//! worker thread and tests can swap in a fake.

use anyhow::Result;

use super::ActivityService;
use crate::models::activity::{Activity, ActivityDraft};
use crate::services::database::Database;

/// Row id of a persisted activity.
pub type ActivityId = i64;

#[cfg_attr(test, mockall::automock)]
pub trait ActivityRepository: Send + Sync {
    /// Persist `draft` for `owner_id`. Exactly one insert per call.
    fn create_activity(&self, owner_id: i64, draft: &ActivityDraft) -> Result<ActivityId>;

    /// All activities owned by `owner_id`.
    fn list_activities(&self, owner_id: i64) -> Result<Vec<Activity>>;
}

/// SQLite-backed repository.
///
/// Opens a fresh connection per call so it can be shared across threads.
/// Not usable with `:memory:` databases for that reason.
#[derive(Debug, Clone)]
pub struct SqliteActivityRepository {
    db_path: String,
}

impl SqliteActivityRepository {
    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn from_database(database: &Database) -> Self {
        Self::new(database.path())
    }
}

impl ActivityRepository for SqliteActivityRepository {
    fn create_activity(&self, owner_id: i64, draft: &ActivityDraft) -> Result<ActivityId> {
        let db = Database::new(&self.db_path)?;
        let id = ActivityService::new(db.connection()).create(owner_id, draft)?;
        log::info!("Saved activity {} for user {}", id, owner_id);
        Ok(id)
    }

    fn list_activities(&self, owner_id: i64) -> Result<Vec<Activity>> {
        let db = Database::new(&self.db_path)?;
        ActivityService::new(db.connection()).list_for_owner(owner_id)
    }
}
