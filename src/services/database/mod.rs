// Database service module
// SQLite connection and schema management

mod connection;
mod schema;

pub use connection::Database;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_new_database_in_memory() {
        let result = Database::new(":memory:");
        assert!(result.is_ok(), "Should create in-memory database");
    }

    #[test]
    fn test_new_database_with_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let db_path_str = db_path.to_str().unwrap();

        let db = Database::new(db_path_str).expect("Should create file-based database");
        assert!(Path::new(db_path_str).exists(), "Database file should exist");
        assert_eq!(db.path(), db_path_str);
    }

    #[test]
    fn test_initialize_schema_is_idempotent() {
        let db = Database::new(":memory:").unwrap();
        assert!(db.initialize_schema().is_ok());
        assert!(db.initialize_schema().is_ok(), "Second run should be a no-op");
    }

    #[test]
    fn test_academic_table_exists() {
        let db = Database::new(":memory:").unwrap();
        db.initialize_schema().unwrap();

        let count: i64 = db
            .connection()
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='academic'",
                [],
                |row| row.get(0),
            )
            .unwrap();

        assert_eq!(count, 1, "academic table should exist");
    }

    #[test]
    fn test_academic_requires_user_and_name() {
        let db = Database::new(":memory:").unwrap();
        db.initialize_schema().unwrap();

        let result = db.connection().execute(
            "INSERT INTO academic (user_id, doc_name, summary, tags, created_at)
             VALUES (NULL, 'x', NULL, 'estudo', '2024-05-01T13:00:00+00:00')",
            [],
        );
        assert!(result.is_err(), "user_id is NOT NULL");

        let result = db.connection().execute(
            "INSERT INTO academic (user_id, doc_name, summary, tags, created_at)
             VALUES (1, NULL, NULL, 'estudo', '2024-05-01T13:00:00+00:00')",
            [],
        );
        assert!(result.is_err(), "doc_name is NOT NULL");
    }

    #[test]
    fn test_foreign_keys_enabled() {
        let db = Database::new(":memory:").unwrap();

        let enabled: i64 = db
            .connection()
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();

        assert_eq!(enabled, 1, "Foreign keys should be enabled");
    }
}
