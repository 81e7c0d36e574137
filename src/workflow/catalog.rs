//! In-memory list of available tags.

use crate::domain::{Tag, TagId};
use crate::store::{NoteStore, StoreResult};
use log::debug;

/// The tags a user can pick from, in registry order.
///
/// Loaded once from the store, then extended locally as tags are created so
/// the list doesn't need a re-fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagCatalog {
    tags: Vec<Tag>,
}

impl TagCatalog {
    /// Loads every tag from the store.
    pub fn load<S: NoteStore + ?Sized>(store: &S) -> StoreResult<Self> {
        let tags = store.list_tags()?;
        debug!("event=catalog_load status=ok count={}", tags.len());
        Ok(Self { tags })
    }

    /// Builds a catalog from tags already in hand.
    pub fn from_tags(tags: Vec<Tag>) -> Self {
        Self { tags }
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Appends a tag. Duplicate labels are kept.
    pub fn push(&mut self, tag: Tag) {
        self.tags.push(tag);
    }

    /// Looks a tag up by id.
    pub fn get(&self, id: &TagId) -> Option<&Tag> {
        self.tags.iter().find(|t| t.id() == id)
    }

    /// Returns every tag with this label, case-insensitively.
    pub fn find_by_label(&self, label: &str) -> Vec<&Tag> {
        self.tags.iter().filter(|t| t.has_label(label)).collect()
    }

    /// Resolves user input to a tag.
    ///
    /// Input is tried as an id first, then as a label; with duplicate labels
    /// the earliest tag wins.
    pub fn resolve(&self, input: &str) -> Option<&Tag> {
        let input = input.trim();
        if let Ok(id) = input.parse::<TagId>()
            && let Some(tag) = self.get(&id)
        {
            return Some(tag);
        }
        self.tags.iter().find(|t| t.has_label(input))
    }
}
