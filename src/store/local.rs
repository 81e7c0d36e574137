//! Single-file JSON document store.
//!
//! The whole store is one JSON document:
//!
//! ```json
//! { "NoteData": [ ...notes ], "Tags": [ ...tags ] }
//! ```
//!
//! Every operation re-reads the file, so several processes may share it
//! (last writer wins). A missing file reads as an empty store.

use crate::domain::{NewNote, Note, NoteId, Tag, TagId};
use crate::store::{BackendError, Collection, NoteStore, StoreError, StoreResult, checked_label};
use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// On-disk layout of the store file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct LocalDocument {
    #[serde(rename = "NoteData", default)]
    notes: Vec<Note>,
    #[serde(rename = "Tags", default)]
    tags: Vec<Tag>,
}

/// Note and tag store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    /// Opens a store at `path`, creating parent directories if needed.
    ///
    /// The file itself is only created on the first write.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| {
                StoreError::fetch(
                    Collection::Notes,
                    BackendError::Io {
                        path: parent.to_path_buf(),
                        source: e,
                    },
                )
            })?;
        }

        debug!(
            "event=store_open backend=local status=ok path={}",
            path.display()
        );
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<LocalDocument, BackendError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(LocalDocument::default()),
            Err(e) => {
                return Err(BackendError::Io {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(LocalDocument::default());
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Writes the document via a temp file in the same directory, then renames.
    fn save(&self, doc: &LocalDocument) -> Result<(), BackendError> {
        let io_err = |source: io::Error| BackendError::Io {
            path: self.path.clone(),
            source,
        };

        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let json = serde_json::to_vec_pretty(doc)?;
        let mut temp = NamedTempFile::new_in(parent).map_err(io_err)?;
        temp.write_all(&json).map_err(io_err)?;
        temp.write_all(b"\n").map_err(io_err)?;
        temp.flush().map_err(io_err)?;
        temp.persist(&self.path).map_err(|e| io_err(e.error))?;
        Ok(())
    }

    /// Loads, applies `f`, and saves. Nothing is written if `f` fails.
    fn update<T>(
        &self,
        collection: Collection,
        f: impl FnOnce(&mut LocalDocument) -> T,
    ) -> StoreResult<T> {
        let mut doc = self
            .load()
            .map_err(|e| StoreError::persistence(collection, e))?;
        let out = f(&mut doc);
        self.save(&doc)
            .map_err(|e| StoreError::persistence(collection, e))?;
        Ok(out)
    }

    fn read(&self, collection: Collection) -> StoreResult<LocalDocument> {
        self.load().map_err(|e| StoreError::fetch(collection, e))
    }
}

impl NoteStore for LocalStore {
    fn backend_name(&self) -> &'static str {
        "local"
    }

    fn create_tag(&mut self, label: &str) -> StoreResult<Tag> {
        let label = checked_label(label)?;
        let tag =
            Tag::new(TagId::generate(), label).map_err(|e| StoreError::InvalidInput(e.to_string()))?;

        let stored = tag.clone();
        self.update(Collection::Tags, move |doc| doc.tags.push(stored))?;

        info!(
            "event=tag_create backend=local status=ok tag_id={}",
            tag.id()
        );
        Ok(tag)
    }

    fn list_tags(&self) -> StoreResult<Vec<Tag>> {
        Ok(self.read(Collection::Tags)?.tags)
    }

    fn get_tag(&self, id: &TagId) -> StoreResult<Option<Tag>> {
        Ok(self
            .read(Collection::Tags)?
            .tags
            .into_iter()
            .find(|t| t.id() == id))
    }

    fn create_note(&mut self, note: &NewNote) -> StoreResult<Note> {
        let note = note.clone().into_note(NoteId::generate(), Utc::now());

        let stored = note.clone();
        self.update(Collection::Notes, move |doc| doc.notes.push(stored))?;

        info!(
            "event=note_create backend=local status=ok note_id={} tag_count={}",
            note.id(),
            note.tags().len()
        );
        Ok(note)
    }

    fn list_notes(&self) -> StoreResult<Vec<Note>> {
        let notes = self.read(Collection::Notes)?.notes;
        debug!(
            "event=note_list backend=local status=ok count={}",
            notes.len()
        );
        Ok(notes)
    }

    fn get_note(&self, id: &NoteId) -> StoreResult<Option<Note>> {
        Ok(self
            .read(Collection::Notes)?
            .notes
            .into_iter()
            .find(|n| n.id() == id))
    }
}
