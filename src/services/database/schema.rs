use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn initialize_schema(conn: &Connection) -> Result<()> {
    create_academic_table(conn)?;
    create_academic_indexes(conn)?;
    Ok(())
}

fn create_academic_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS academic (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            doc_name TEXT NOT NULL,
            summary TEXT,
            tags TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
        [],
    )
    .context("Failed to create academic table")?;

    Ok(())
}

fn create_academic_indexes(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_academic_user_created
            ON academic(user_id, created_at)",
        [],
    )
    .context("Failed to create academic index")?;

    Ok(())
}
