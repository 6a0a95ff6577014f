use super::shared::map_activity_row;
use super::ActivityService;
use crate::models::activity::Activity;
use anyhow::{Context, Result};

impl<'a> ActivityService<'a> {
    /// Retrieve an activity by ID.
    #[cfg(test)]
    pub(crate) fn get(&self, id: i64) -> Result<Option<Activity>> {
        use rusqlite::OptionalExtension;

        self.conn
            .query_row(
                "SELECT id, user_id, doc_name, summary, tags, created_at
                 FROM academic WHERE id = ?",
                [id],
                map_activity_row,
            )
            .optional()
            .context("Failed to load activity")
    }

    /// List a user's activities, soonest first.
    pub fn list_for_owner(&self, owner_id: i64) -> Result<Vec<Activity>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, user_id, doc_name, summary, tags, created_at
             FROM academic
             WHERE user_id = ?
             ORDER BY created_at ASC, id ASC",
        )?;

        let activities = stmt
            .query_map([owner_id], map_activity_row)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to list activities")?;

        Ok(activities)
    }
}
