//! Note filtering: title substring AND required-tag intersection.
//!
//! Everything here is a pure function of its inputs. Callers keep the query
//! state themselves and pass it in.

use crate::domain::{Note, Tag, TagId};
use std::collections::HashSet;

/// The current browse state: a title query and a set of required tags.
///
/// An empty title matches every note; an empty tag set matches every note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteQuery {
    title: String,
    tags: Vec<Tag>,
}

impl NoteQuery {
    /// Creates a query that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title substring.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Adds a required tag.
    pub fn tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Sets the required tags.
    pub fn tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    /// Returns the title substring.
    pub fn title_query(&self) -> &str {
        &self.title
    }

    /// Returns the required tags.
    pub fn required_tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Returns true if the query matches every note.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.tags.is_empty()
    }

    /// Returns true if `note` passes both predicates.
    pub fn matches(&self, note: &Note) -> bool {
        Matcher::new(&self.title, &self.tags).matches(note)
    }

    /// Returns the matching notes in their original order.
    pub fn filter(&self, notes: &[Note]) -> Vec<Note> {
        filter_notes(notes, &self.title, &self.tags)
    }
}

/// Narrows `notes` to those whose title contains `title_query`
/// (case-insensitive) and that carry every tag in `tag_filter` (by id).
///
/// Order is preserved and nothing is truncated.
///
/// # Examples
///
/// ```
/// use quill::domain::{filter_notes, Note, NoteId, Tag};
/// use chrono::Utc;
///
/// let home = Tag::new("1".parse().unwrap(), "home").unwrap();
/// let work = Tag::new("2".parse().unwrap(), "work").unwrap();
/// let notes = vec![
///     Note::builder(NoteId::generate(), Utc::now()).title("Groceries").tags(vec![home.clone()]).build(),
///     Note::builder(NoteId::generate(), Utc::now()).title("Taxes").tags(vec![work]).build(),
/// ];
///
/// let by_title = filter_notes(&notes, "tax", &[]);
/// assert_eq!(by_title.len(), 1);
/// assert_eq!(by_title[0].title(), "Taxes");
///
/// let by_tag = filter_notes(&notes, "", &[home]);
/// assert_eq!(by_tag[0].title(), "Groceries");
/// ```
pub fn filter_notes(notes: &[Note], title_query: &str, tag_filter: &[Tag]) -> Vec<Note> {
    let matcher = Matcher::new(title_query, tag_filter);
    notes
        .iter()
        .filter(|note| matcher.matches(note))
        .cloned()
        .collect()
}

/// Pre-lowered query so each note costs one lowercase and one set lookup per tag.
struct Matcher<'a> {
    title: String,
    required: HashSet<&'a TagId>,
}

impl<'a> Matcher<'a> {
    fn new(title_query: &str, tag_filter: &'a [Tag]) -> Self {
        Self {
            title: title_query.to_lowercase(),
            required: tag_filter.iter().map(|t| t.id()).collect(),
        }
    }

    fn matches(&self, note: &Note) -> bool {
        self.matches_title(note) && self.matches_tags(note)
    }

    fn matches_title(&self, note: &Note) -> bool {
        self.title.is_empty() || note.title().to_lowercase().contains(&self.title)
    }

    fn matches_tags(&self, note: &Note) -> bool {
        if self.required.is_empty() {
            return true;
        }
        let note_tags: HashSet<&TagId> = note.tags().iter().map(|t| t.id()).collect();
        self.required.is_subset(&note_tags)
    }
}
