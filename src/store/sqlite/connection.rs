//! Connection management for SqliteStore.

use super::SqliteStore;
use super::schema::create_schema;
use super::transaction::Transaction;
use crate::store::{BackendError, Collection, StoreError, StoreResult};
use log::debug;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

impl SqliteStore {
    /// Opens an in-memory database with the schema in place.
    ///
    /// Nothing survives the store being dropped; useful for tests.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory().map_err(open_failed)?;
        create_schema(&conn).map_err(open_failed)?;
        Ok(Self { conn })
    }

    /// Opens or creates a database at the given path.
    ///
    /// Creates parent directories if they don't exist and initializes the
    /// schema on a new database.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| {
                open_failed(BackendError::Io {
                    path: parent.to_path_buf(),
                    source: e,
                })
            })?;
        }

        let conn = Connection::open(path).map_err(open_failed)?;
        create_schema(&conn).map_err(open_failed)?;
        debug!(
            "event=store_open backend=sqlite status=ok path={}",
            path.display()
        );
        Ok(Self { conn })
    }

    /// Returns a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Begins a new transaction.
    ///
    /// The transaction will automatically rollback on drop unless `commit()` is called.
    pub fn transaction(&mut self) -> rusqlite::Result<Transaction<'_>> {
        self.conn.execute_batch("BEGIN")?;
        Ok(Transaction::new(&self.conn))
    }
}

// Opening touches both collections; report it against notes.
fn open_failed(source: impl Into<BackendError>) -> StoreError {
    StoreError::fetch(Collection::Notes, source)
}
