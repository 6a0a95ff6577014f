// Test fixtures - reusable test data
// Shared by the integration and property test files

#![allow(dead_code)]

use academic_planner::services::database::Database;
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use std::path::PathBuf;

/// UTC-3, a zone without DST so conversions are stable
pub fn brasilia() -> FixedOffset {
    FixedOffset::west_opt(3 * 3600).unwrap()
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
}

/// A schema-initialized database file inside a temp dir.
///
/// Keep the `TempDir` alive for as long as the path is used.
pub fn temp_database() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("academic.db");
    let db = Database::new(path.to_str().unwrap()).expect("open database");
    db.initialize_schema().expect("initialize schema");
    (dir, path)
}

/// Raw `academic` row: user_id, doc_name, summary, tags, created_at
pub type RawRow = (i64, String, Option<String>, String, String);

pub fn raw_rows(path: &PathBuf) -> Vec<RawRow> {
    let db = Database::new(path.to_str().unwrap()).expect("open database");
    let mut stmt = db
        .connection()
        .prepare("SELECT user_id, doc_name, summary, tags, created_at FROM academic ORDER BY id")
        .unwrap();
    stmt.query_map([], |row| {
        Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?))
    })
    .unwrap()
    .collect::<rusqlite::Result<Vec<_>>>()
    .unwrap()
}
