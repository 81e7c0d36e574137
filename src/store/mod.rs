//! Document store adapter: the `NoteStore` trait, its errors, and backends.
//!
//! A store holds two collections, `notes` and `tags`, and supports three
//! operations on each: add a document, get all documents, get one by id.

mod local;
mod sqlite;

pub use local::LocalStore;
pub use sqlite::{SCHEMA_VERSION, SqliteStore, Transaction, get_schema_version};

use crate::domain::{NewNote, Note, NoteId, Tag, TagId};
use log::error;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ===========================================
// Collections
// ===========================================

/// The two document collections a store holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Notes,
    Tags,
}

impl Collection {
    /// Returns the collection name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Notes => "notes",
            Collection::Tags => "tags",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===========================================
// Errors
// ===========================================

/// Low-level failure inside a backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stored data could not be (de)serialized.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored record violates the data model.
    #[error("corrupt record: {0}")]
    Corrupt(String),
}

/// Errors surfaced by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A write to the store failed.
    #[error("failed to write to {collection}: {source}")]
    Persistence {
        collection: Collection,
        #[source]
        source: BackendError,
    },

    /// A read from the store failed.
    #[error("failed to read from {collection}: {source}")]
    Fetch {
        collection: Collection,
        #[source]
        source: BackendError,
    },

    /// The id is well-formed but no record has it.
    #[error("{collection} record not found: {id}")]
    NotFound { collection: Collection, id: String },

    /// The caller passed something the data model rejects.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl StoreError {
    /// Wraps a failed write, logging it first.
    pub fn persistence(collection: Collection, source: impl Into<BackendError>) -> Self {
        let source = source.into();
        error!(
            "event=store_write collection={} status=error error={}",
            collection, source
        );
        StoreError::Persistence { collection, source }
    }

    /// Wraps a failed read, logging it first.
    pub fn fetch(collection: Collection, source: impl Into<BackendError>) -> Self {
        let source = source.into();
        error!(
            "event=store_read collection={} status=error error={}",
            collection, source
        );
        StoreError::Fetch { collection, source }
    }

    /// Returns true for the `NotFound` variant.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// ===========================================
// NoteStore Trait
// ===========================================

/// Repository trait for the note and tag collections.
///
/// Implementations may use different storage backends (SQLite, a local JSON
/// document). Every listing returns records in insertion order.
pub trait NoteStore {
    /// Short backend name for diagnostics.
    fn backend_name(&self) -> &'static str;

    /// Persists a new tag with a freshly generated id and returns it.
    ///
    /// Labels are not deduplicated: creating `home` twice yields two tags.
    fn create_tag(&mut self, label: &str) -> StoreResult<Tag>;

    /// Lists every tag.
    fn list_tags(&self) -> StoreResult<Vec<Tag>>;

    /// Retrieves one tag by id.
    fn get_tag(&self, id: &TagId) -> StoreResult<Option<Tag>>;

    /// Finds every tag with this label (case-insensitive exact match).
    fn find_tags_by_label(&self, label: &str) -> StoreResult<Vec<Tag>> {
        Ok(self
            .list_tags()?
            .into_iter()
            .filter(|t| t.has_label(label))
            .collect())
    }

    /// Persists a new note and returns it with its assigned id.
    fn create_note(&mut self, note: &NewNote) -> StoreResult<Note>;

    /// Lists every note.
    fn list_notes(&self) -> StoreResult<Vec<Note>>;

    /// Retrieves one note by id.
    fn get_note(&self, id: &NoteId) -> StoreResult<Option<Note>>;
}

/// Validates a tag label for `create_tag`.
pub(crate) fn checked_label(label: &str) -> StoreResult<String> {
    Tag::normalize_label(label).map_err(|e| StoreError::InvalidInput(e.to_string()))
}
