//! Database connection management

use crate::error::Result;
use rusqlite::Connection;
use std::path::Path;

use super::schema;

/// Database wrapper for the `SQLite` preference file
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at the given path, creating it if it doesn't exist
    ///
    /// Creates the schema automatically.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Opening preference database");
        Self::init(Connection::open(path)?)
    }

    /// Open an in-memory database (useful for testing)
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        let database = Self { conn };
        database.configure();
        schema::run(&database.conn)?;
        Ok(database)
    }

    /// Configure `SQLite` pragmas; failures are not fatal
    fn configure(&self) {
        // In-memory databases report "memory" here
        self.conn
            .pragma_update_and_check(None, "journal_mode", "WAL", |row| {
                row.get::<_, String>(0)
            })
            .ok();
        self.conn
            .pragma_update(None, "synchronous", "NORMAL")
            .ok();
    }

    /// Get a reference to the underlying connection
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_in_memory() {
        let db = Database::open_in_memory().unwrap();
        let value: i32 = db
            .connection()
            .query_row("SELECT 1", [], |row| row.get(0))
            .unwrap();
        assert_eq!(value, 1);
    }

    #[test]
    fn test_open_file_creates_database() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("settings.db");

        let db = Database::open(&path).unwrap();
        drop(db);

        assert!(path.exists());
        // Reopening an existing file must not fail on schema creation
        Database::open(&path).unwrap();
    }
}
