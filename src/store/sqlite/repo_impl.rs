//! NoteStore trait implementation for SqliteStore.

use super::SqliteStore;
use crate::domain::{NewNote, Note, NoteId, Tag, TagId};
use crate::store::{
    BackendError, Collection, NoteStore, StoreError, StoreResult, checked_label,
};
use chrono::{DateTime, Utc};
use log::{debug, info};
use rusqlite::{OptionalExtension, Row};

const NOTE_COLUMNS: &str = "id, title, description, tags, created";

/// Raw column values of a `notes` row, before validation.
struct NoteRow {
    id: String,
    title: String,
    description: String,
    tags: String,
    created: String,
}

impl NoteRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            tags: row.get(3)?,
            created: row.get(4)?,
        })
    }

    fn into_note(self) -> Result<Note, BackendError> {
        let id: NoteId = self
            .id
            .parse()
            .map_err(|e| BackendError::Corrupt(format!("invalid note id in database: {}", e)))?;

        let tags: Vec<Tag> = serde_json::from_str(&self.tags)?;

        let created = DateTime::parse_from_rfc3339(&self.created)
            .map_err(|e| BackendError::Corrupt(format!("invalid created timestamp: {}", e)))?
            .with_timezone(&Utc);

        Ok(Note::builder(id, created)
            .title(self.title)
            .description(self.description)
            .tags(tags)
            .build())
    }
}

fn tag_from_row(row: &Row<'_>) -> rusqlite::Result<(String, String)> {
    Ok((row.get(0)?, row.get(1)?))
}

fn parse_tag((id, label): (String, String)) -> Result<Tag, BackendError> {
    let id: TagId = id
        .parse()
        .map_err(|e| BackendError::Corrupt(format!("invalid tag id in database: {}", e)))?;
    Tag::new(id, label).map_err(|e| BackendError::Corrupt(e.to_string()))
}

impl NoteStore for SqliteStore {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    fn create_tag(&mut self, label: &str) -> StoreResult<Tag> {
        let label = checked_label(label)?;
        let id = TagId::generate();

        self.conn
            .execute(
                "INSERT INTO tags (id, label) VALUES (?1, ?2)",
                rusqlite::params![id.as_str(), label],
            )
            .map_err(|e| StoreError::persistence(Collection::Tags, e))?;

        info!(
            "event=tag_create backend=sqlite status=ok tag_id={}",
            id
        );
        Tag::new(id, label).map_err(|e| StoreError::InvalidInput(e.to_string()))
    }

    fn list_tags(&self) -> StoreResult<Vec<Tag>> {
        let fetch = |e: rusqlite::Error| StoreError::fetch(Collection::Tags, e);

        let mut stmt = self
            .conn
            .prepare("SELECT id, label FROM tags ORDER BY seq")
            .map_err(fetch)?;
        let rows = stmt
            .query_map([], tag_from_row)
            .map_err(fetch)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(fetch)?;

        rows.into_iter()
            .map(|row| parse_tag(row).map_err(|e| StoreError::fetch(Collection::Tags, e)))
            .collect()
    }

    fn get_tag(&self, id: &TagId) -> StoreResult<Option<Tag>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, label FROM tags WHERE id = ?",
                [id.as_str()],
                tag_from_row,
            )
            .optional()
            .map_err(|e| StoreError::fetch(Collection::Tags, e))?;

        row.map(parse_tag)
            .transpose()
            .map_err(|e| StoreError::fetch(Collection::Tags, e))
    }

    fn create_note(&mut self, note: &NewNote) -> StoreResult<Note> {
        let persist = |e: rusqlite::Error| StoreError::persistence(Collection::Notes, e);

        let id = NoteId::generate();
        let created = Utc::now();
        let tags_json = serde_json::to_string(&note.tags)
            .map_err(|e| StoreError::persistence(Collection::Notes, e))?;

        let tx = self.transaction().map_err(persist)?;

        tx.execute(
            "INSERT INTO notes (id, title, description, tags, created)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                id.as_str(),
                note.title,
                note.description,
                tags_json,
                created.to_rfc3339(),
            ],
        )
        .map_err(persist)?;

        // Read back inside the transaction so a bad write never commits.
        let stored = tx
            .conn()
            .query_row(
                &format!("SELECT {} FROM notes WHERE id = ?", NOTE_COLUMNS),
                [id.as_str()],
                NoteRow::from_row,
            )
            .map_err(persist)?
            .into_note()
            .map_err(|e| StoreError::persistence(Collection::Notes, e))?;

        tx.commit().map_err(persist)?;

        info!(
            "event=note_create backend=sqlite status=ok note_id={} tag_count={}",
            stored.id(),
            stored.tags().len()
        );
        Ok(stored)
    }

    fn list_notes(&self) -> StoreResult<Vec<Note>> {
        let fetch = |e: rusqlite::Error| StoreError::fetch(Collection::Notes, e);

        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM notes ORDER BY seq", NOTE_COLUMNS))
            .map_err(fetch)?;
        let rows = stmt
            .query_map([], NoteRow::from_row)
            .map_err(fetch)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(fetch)?;

        let notes = rows
            .into_iter()
            .map(|row| {
                row.into_note()
                    .map_err(|e| StoreError::fetch(Collection::Notes, e))
            })
            .collect::<StoreResult<Vec<Note>>>()?;

        debug!(
            "event=note_list backend=sqlite status=ok count={}",
            notes.len()
        );
        Ok(notes)
    }

    fn get_note(&self, id: &NoteId) -> StoreResult<Option<Note>> {
        let row = self
            .conn
            .query_row(
                &format!("SELECT {} FROM notes WHERE id = ?", NOTE_COLUMNS),
                [id.as_str()],
                NoteRow::from_row,
            )
            .optional()
            .map_err(|e| StoreError::fetch(Collection::Notes, e))?;

        row.map(NoteRow::into_note)
            .transpose()
            .map_err(|e| StoreError::fetch(Collection::Notes, e))
    }
}
