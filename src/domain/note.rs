//! Note records and the create-note payload.

use crate::domain::{NoteId, Tag, TagId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A stored note.
///
/// # Fields
/// - `id`: assigned by the store
/// - `title`: free text, may be empty
/// - `description`: free text, may be empty
/// - `tags`: ordered, embedded `{id, label}` copies taken when the note was
///   created; renaming a tag later does not touch existing notes
/// - `created`: set by the store on insert
///
/// Notes are immutable once stored.
///
/// # Examples
///
/// ```
/// use quill::domain::{Note, NoteId, Tag, TagId};
/// use chrono::Utc;
///
/// let home = Tag::new(TagId::generate(), "home").unwrap();
/// let note = Note::builder(NoteId::generate(), Utc::now())
///     .title("Groceries")
///     .description("milk, eggs")
///     .tags(vec![home.clone()])
///     .build();
/// assert_eq!(note.title(), "Groceries");
/// assert!(note.has_tag(home.id()));
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    id: NoteId,
    title: String,
    description: String,
    #[serde(default)]
    tags: Vec<Tag>,
    created: DateTime<Utc>,
}

impl Note {
    /// Creates a builder for a note with the given identity.
    pub fn builder(id: NoteId, created: DateTime<Utc>) -> NoteBuilder {
        NoteBuilder::new(id, created)
    }

    /// Returns the note's id.
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note's description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the note's embedded tags, in the order they were attached.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Returns when the note was stored.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Returns true if the note carries a tag with this id.
    pub fn has_tag(&self, id: &TagId) -> bool {
        self.tags.iter().any(|t| t.id() == id)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.id)
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("description", &self.description)
            .field("tags", &self.tags)
            .field("created", &self.created)
            .finish()
    }
}

/// Builder for constructing a Note.
pub struct NoteBuilder {
    id: NoteId,
    created: DateTime<Utc>,
    title: String,
    description: String,
    tags: Vec<Tag>,
}

impl NoteBuilder {
    fn new(id: NoteId, created: DateTime<Utc>) -> Self {
        Self {
            id,
            created,
            title: String::new(),
            description: String::new(),
            tags: Vec::new(),
        }
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the tags.
    ///
    /// A tag id listed twice is kept once (first occurrence).
    pub fn tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = deduplicate_tags(tags);
        self
    }

    /// Builds the Note.
    pub fn build(self) -> Note {
        Note {
            id: self.id,
            title: self.title,
            description: self.description,
            tags: self.tags,
            created: self.created,
        }
    }
}

/// The payload of a create-note call: everything but the store-assigned fields.
///
/// `tags` is the simplified tag list: only `{id, label}` per tag, which is all
/// a [`Tag`] holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub description: String,
    pub tags: Vec<Tag>,
}

impl NewNote {
    /// Creates a payload with no tags.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tags: Vec::new(),
        }
    }

    /// Sets the tags.
    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    /// Returns true if both title and description are blank.
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.description.trim().is_empty()
    }

    /// Turns the payload into a stored note once the store has assigned an identity.
    pub fn into_note(self, id: NoteId, created: DateTime<Utc>) -> Note {
        Note::builder(id, created)
            .title(self.title)
            .description(self.description)
            .tags(self.tags)
            .build()
    }
}

/// Removes tags whose id was already seen.
fn deduplicate_tags(tags: Vec<Tag>) -> Vec<Tag> {
    let mut seen: Vec<Tag> = Vec::new();
    for tag in tags {
        if !seen.iter().any(|t| t.id() == tag.id()) {
            seen.push(tag);
        }
    }
    seen
}
