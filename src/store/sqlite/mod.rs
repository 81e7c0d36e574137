//! SQLite-backed document store.

mod connection;
mod repo_impl;
mod schema;
mod transaction;


use rusqlite::Connection;

pub use schema::{SCHEMA_VERSION, get_schema_version};
pub use transaction::Transaction;

/// SQLite-backed note and tag store.
///
/// One table per collection. Notes store their tags as an embedded JSON
/// snapshot rather than a join table.
pub struct SqliteStore {
    pub(crate) conn: Connection,
}
