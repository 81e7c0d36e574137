//! Lookup of one note by id.

use crate::domain::{Note, NoteId};
use crate::store::{Collection, NoteStore, StoreError, StoreResult};
use log::{debug, warn};

/// Fetches a note, turning an absent record into `StoreError::NotFound`.
pub fn fetch_note<S: NoteStore + ?Sized>(store: &S, id: &NoteId) -> StoreResult<Note> {
    store.get_note(id)?.ok_or_else(|| StoreError::NotFound {
        collection: Collection::Notes,
        id: id.to_string(),
    })
}

/// State of a single-note lookup.
///
/// Starts at `Loading` and moves to exactly one terminal state. Terminal
/// states never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteDetail {
    Loading,
    Found(Note),
    NotFound(NoteId),
    /// The store failed; holds the error message.
    Error(String),
}

impl NoteDetail {
    pub fn new() -> Self {
        NoteDetail::Loading
    }

    /// Runs a lookup to completion.
    pub fn load<S: NoteStore + ?Sized>(store: &S, id: &NoteId) -> Self {
        let mut detail = Self::new();
        detail.resolve(id, fetch_note(store, id));
        detail
    }

    /// Applies a lookup result. Ignored unless the state is `Loading`.
    pub fn resolve(&mut self, id: &NoteId, result: StoreResult<Note>) {
        if self.is_terminal() {
            debug!("event=note_detail status=ignored note_id={}", id);
            return;
        }
        *self = match result {
            Ok(note) => NoteDetail::Found(note),
            Err(err) if err.is_not_found() => {
                debug!("event=note_detail status=not_found note_id={}", id);
                NoteDetail::NotFound(id.clone())
            }
            Err(err) => {
                warn!(
                    "event=note_detail status=error note_id={} error={}",
                    id, err
                );
                NoteDetail::Error(err.to_string())
            }
        };
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, NoteDetail::Loading)
    }

    /// Returns the note if it was found.
    pub fn note(&self) -> Option<&Note> {
        match self {
            NoteDetail::Found(note) => Some(note),
            _ => None,
        }
    }
}

impl Default for NoteDetail {
    fn default() -> Self {
        Self::new()
    }
}
