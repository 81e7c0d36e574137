//! The note being composed before it is saved.

use crate::domain::{NewNote, Note, Tag, TagId};
use crate::store::{NoteStore, StoreError, StoreResult};
use crate::workflow::TagCatalog;
use log::{info, warn};

/// Form state for a new note: title, description, and the selected tags.
///
/// Nothing touches the store until [`NoteDraft::create_tag`] or
/// [`NoteDraft::save`] is called.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    title: String,
    description: String,
    selected: Vec<Tag>,
}

impl NoteDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Tags chosen for the note, in selection order.
    pub fn selected(&self) -> &[Tag] {
        &self.selected
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Adds a tag to the selection. Selecting the same id twice is a no-op.
    pub fn select(&mut self, tag: Tag) {
        if !self.selected.iter().any(|t| t.id() == tag.id()) {
            self.selected.push(tag);
        }
    }

    /// Removes a tag from the selection; returns whether it was selected.
    pub fn deselect(&mut self, id: &TagId) -> bool {
        let before = self.selected.len();
        self.selected.retain(|t| t.id() != id);
        self.selected.len() != before
    }

    /// Creates a tag in the store, then adds it to the catalog and selects it.
    ///
    /// If the store fails, neither the catalog nor the selection changes.
    pub fn create_tag<S: NoteStore + ?Sized>(
        &mut self,
        store: &mut S,
        catalog: &mut TagCatalog,
        label: &str,
    ) -> StoreResult<Tag> {
        let tag = store.create_tag(label)?;
        catalog.push(tag.clone());
        self.selected.push(tag.clone());
        Ok(tag)
    }

    /// Returns the create-note payload for the current state.
    pub fn to_new_note(&self) -> NewNote {
        NewNote::new(self.title.clone(), self.description.clone()).with_tags(self.selected.clone())
    }

    /// Persists the draft as a note.
    ///
    /// On success the draft is cleared. On failure it is left untouched so
    /// the user can retry.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if both title and description are blank, otherwise
    /// whatever the store returns.
    pub fn save<S: NoteStore + ?Sized>(&mut self, store: &mut S) -> StoreResult<Note> {
        let payload = self.to_new_note();
        if payload.is_blank() {
            warn!("event=draft_save status=rejected reason=blank");
            return Err(StoreError::InvalidInput(
                "a note needs a title or a description".to_string(),
            ));
        }

        let note = store.create_note(&payload)?;
        info!(
            "event=draft_save status=ok note_id={} backend={}",
            note.id(),
            store.backend_name()
        );
        self.cancel();
        Ok(note)
    }

    /// Discards the draft.
    pub fn cancel(&mut self) {
        self.title.clear();
        self.description.clear();
        self.selected.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NoteId;
    use crate::store::{BackendError, Collection, SqliteStore};
    use pretty_assertions::assert_eq;

    /// A store whose writes always fail.
    struct ReadOnlyStore;

    impl NoteStore for ReadOnlyStore {
        fn backend_name(&self) -> &'static str {
            "read-only"
        }

        fn create_tag(&mut self, _label: &str) -> StoreResult<Tag> {
            Err(StoreError::persistence(
                Collection::Tags,
                BackendError::Corrupt("read-only".to_string()),
            ))
        }

        fn list_tags(&self) -> StoreResult<Vec<Tag>> {
            Ok(Vec::new())
        }

        fn get_tag(&self, _id: &TagId) -> StoreResult<Option<Tag>> {
            Ok(None)
        }

        fn create_note(&mut self, _note: &NewNote) -> StoreResult<Note> {
            Err(StoreError::persistence(
                Collection::Notes,
                BackendError::Corrupt("read-only".to_string()),
            ))
        }

        fn list_notes(&self) -> StoreResult<Vec<Note>> {
            Ok(Vec::new())
        }

        fn get_note(&self, _id: &NoteId) -> StoreResult<Option<Note>> {
            Ok(None)
        }
    }

    fn tag(id: &str, label: &str) -> Tag {
        Tag::new(id.parse().unwrap(), label).unwrap()
    }

    #[test]
    fn select_ignores_repeated_id() {
        let mut draft = NoteDraft::new();
        draft.select(tag("1", "home"));
        draft.select(tag("1", "home"));
        draft.select(tag("2", "home"));
        assert_eq!(draft.selected().len(), 2);
    }

    #[test]
    fn deselect_removes_by_id() {
        let mut draft = NoteDraft::new();
        draft.select(tag("1", "home"));
        assert!(draft.deselect(&"1".parse().unwrap()));
        assert!(!draft.deselect(&"1".parse().unwrap()));
        assert!(draft.selected().is_empty());
    }

    #[test]
    fn create_tag_persists_then_updates_catalog_and_selection() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let mut catalog = TagCatalog::default();
        let mut draft = NoteDraft::new();

        let tag = draft.create_tag(&mut store, &mut catalog, "errands").unwrap();

        assert_eq!(catalog.tags(), &[tag.clone()]);
        assert_eq!(draft.selected(), &[tag.clone()]);
        assert_eq!(store.get_tag(tag.id()).unwrap(), Some(tag));
    }

    #[test]
    fn create_tag_failure_leaves_state_unchanged() {
        let mut store = ReadOnlyStore;
        let mut catalog = TagCatalog::default();
        let mut draft = NoteDraft::new();

        let err = draft
            .create_tag(&mut store, &mut catalog, "errands")
            .unwrap_err();

        assert!(matches!(err, StoreError::Persistence { .. }));
        assert!(catalog.is_empty());
        assert!(draft.selected().is_empty());
    }

    #[test]
    fn save_persists_and_clears() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let home = store.create_tag("home").unwrap();
        let mut draft = NoteDraft::new();
        draft.set_title("Groceries");
        draft.set_description("milk, eggs");
        draft.select(home.clone());

        let note = draft.save(&mut store).unwrap();

        assert_eq!(note.title(), "Groceries");
        assert_eq!(note.description(), "milk, eggs");
        assert_eq!(note.tags(), &[home]);
        assert_eq!(draft, NoteDraft::new());
        assert_eq!(store.list_notes().unwrap(), vec![note]);
    }

    #[test]
    fn save_failure_keeps_draft() {
        let mut store = ReadOnlyStore;
        let mut draft = NoteDraft::new();
        draft.set_title("Taxes");
        draft.select(tag("2", "work"));
        let before = draft.clone();

        assert!(draft.save(&mut store).is_err());
        assert_eq!(draft, before);
    }

    #[test]
    fn save_rejects_blank_draft() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let mut draft = NoteDraft::new();
        draft.set_title("  ");

        let err = draft.save(&mut store).unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
        assert!(store.list_notes().unwrap().is_empty());
    }

    #[test]
    fn description_alone_is_enough() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let mut draft = NoteDraft::new();
        draft.set_description("untitled thought");
        assert_eq!(draft.save(&mut store).unwrap().title(), "");
    }

    #[test]
    fn cancel_clears_everything() {
        let mut draft = NoteDraft::new();
        draft.set_title("t");
        draft.set_description("d");
        draft.select(tag("1", "home"));
        draft.cancel();
        assert_eq!(draft, NoteDraft::default());
    }
}
