//! Academic activity service entry point.
//! Database-backed operations on the `academic` table, plus the
//! thread-safe repository the dialog submits through.

use rusqlite::Connection;

pub mod crud;
pub mod queries;
pub mod repository;
mod shared;

pub use repository::{ActivityId, ActivityRepository, SqliteActivityRepository};

#[cfg(test)]
pub use repository::MockActivityRepository;

/// Service for managing academic activities stored in SQLite.
pub struct ActivityService<'a> {
    pub(crate) conn: &'a Connection,
}

impl<'a> ActivityService<'a> {
    /// Create a new ActivityService with a database connection
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}
