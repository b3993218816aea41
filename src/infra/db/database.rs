//! SQLite database setup and connection management.
//! Handles database opening, schema creation, and connection sharing.

use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::domain::StorageError;
use crate::infra::db::repository::ContactRepository;

/// Database wrapper that manages the SQLite connection.
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Create or open the database file at `path`.
    pub fn open_at(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let conn = Connection::open(&path).map_err(|source| StorageError::Open {
            path: path.clone(),
            source,
        })?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.init()
            .map_err(|source| StorageError::Open { path, source })?;
        Ok(db)
    }

    /// Create an in-memory database (useful for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.init()?;
        Ok(db)
    }

    /// Ensure the contacts table exists. Safe to run against a file that
    /// already has it; existing rows are untouched.
    fn init(&self) -> rusqlite::Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS contacts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                phone TEXT NOT NULL,
                email TEXT NOT NULL
            );",
        )
    }

    /// Get a handle to the shared connection.
    pub fn connection(&self) -> Arc<Mutex<Connection>> {
        self.conn.clone()
    }

    pub fn contact_repo(&self) -> ContactRepository {
        ContactRepository::new(self.connection())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Contact;

    #[test]
    fn test_database_open_in_memory() {
        let db = Database::open_in_memory().unwrap();
        let conn = db.connection();
        let guard = conn.lock().unwrap();
        let res: i32 = guard.query_row("SELECT 1", [], |row| row.get(0)).unwrap();
        assert_eq!(res, 1);
    }

    #[test]
    fn test_init_creates_contacts_table() {
        let db = Database::open_in_memory().unwrap();
        let conn = db.connection();
        let guard = conn.lock().unwrap();
        let count: i32 = guard
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='contacts'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_reopening_same_file_keeps_rows() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("contacts.db");

        {
            let db = Database::open_at(&path)?;
            let repo = db.contact_repo();
            repo.save(&Contact::new("Alice", "555-1111", "a@x.com"))?;
        }

        // Second process start against the same file: init must neither
        // error nor duplicate or drop existing rows.
        let db = Database::open_at(&path)?;
        let repo = db.contact_repo();
        let all = repo.find_all()?;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Alice");
        Ok(())
    }
}
