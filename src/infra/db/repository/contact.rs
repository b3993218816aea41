use super::DbConn;
use crate::domain::{Contact, StorageError};

/// Durable CRUD access to the `contacts` table.
///
/// Every statement is parameterized; user-supplied values are only ever
/// bound by position, never spliced into the SQL text.
pub struct ContactRepository {
    conn: DbConn,
}

impl ContactRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    /// Insert `contact` and return the id assigned by the database.
    pub fn save(&self, contact: &Contact) -> Result<i64, StorageError> {
        let conn = self
            .conn
            .lock()
            .expect("ContactRepository: failed to acquire database lock");
        conn.execute(
            "INSERT INTO contacts (name, phone, email) VALUES (?1, ?2, ?3)",
            (&contact.name, &contact.phone, &contact.email),
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// All contacts in insertion order.
    pub fn find_all(&self) -> Result<Vec<Contact>, StorageError> {
        let conn = self
            .conn
            .lock()
            .expect("ContactRepository: failed to acquire database lock");
        let mut stmt = conn.prepare("SELECT id, name, phone, email FROM contacts ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Contact {
                id: Some(row.get(0)?),
                name: row.get(1)?,
                phone: row.get(2)?,
                email: row.get(3)?,
            })
        })?;

        let mut contacts = Vec::new();
        for row in rows {
            contacts.push(row?);
        }
        Ok(contacts)
    }

    /// Contacts whose name contains `term`, in insertion order.
    ///
    /// The term is bound into `LIKE '%term%'` unescaped: `%` and `_` inside
    /// it act as SQL wildcards, and matching follows SQLite's default
    /// ASCII case-insensitive LIKE.
    pub fn search_by_name(&self, term: &str) -> Result<Vec<Contact>, StorageError> {
        let conn = self
            .conn
            .lock()
            .expect("ContactRepository: failed to acquire database lock");
        let mut stmt = conn
            .prepare("SELECT id, name, phone, email FROM contacts WHERE name LIKE ?1 ORDER BY id")?;
        let rows = stmt.query_map([format!("%{term}%")], |row| {
            Ok(Contact {
                id: Some(row.get(0)?),
                name: row.get(1)?,
                phone: row.get(2)?,
                email: row.get(3)?,
            })
        })?;

        let mut contacts = Vec::new();
        for row in rows {
            contacts.push(row?);
        }
        Ok(contacts)
    }

    /// Delete every contact whose name is exactly `name`.
    ///
    /// Zero matches is not an error; callers are not told how many rows
    /// went away.
    pub fn delete_by_name(&self, name: &str) -> Result<(), StorageError> {
        let conn = self
            .conn
            .lock()
            .expect("ContactRepository: failed to acquire database lock");
        conn.execute("DELETE FROM contacts WHERE name = ?1", [name])?;
        Ok(())
    }
}
