use super::ActivityService;
use crate::models::activity::ActivityDraft;
use anyhow::{Context, Result};
use rusqlite::params;

pub(crate) const INSERT_ACTIVITY_SQL: &str =
    "INSERT INTO academic (user_id, doc_name, summary, tags, created_at)
     VALUES (CAST(?1 AS INTEGER), ?2, ?3, ?4, ?5)";

impl<'a> ActivityService<'a> {
    /// Insert a draft owned by `owner_id` and return the new row id.
    ///
    /// The draft is stored as-is; required-field checks belong to the form.
    pub fn create(&self, owner_id: i64, draft: &ActivityDraft) -> Result<i64> {
        self.conn
            .execute(
                INSERT_ACTIVITY_SQL,
                params![
                    owner_id,
                    draft.name,
                    draft.details,
                    draft.tag.key(),
                    draft.occurs_at.to_rfc3339(),
                ],
            )
            .context("Failed to insert activity")?;

        Ok(self.conn.last_insert_rowid())
    }
}
