//! Tag records: an id plus a user-entered label.

use crate::domain::TagId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error returned when constructing a tag with an invalid label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTagError(String);

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseTagError {}

/// A labeled category attachable to notes.
///
/// The `id` is the identity: filtering and selection compare ids only. The
/// `label` is the display and search key and is *not* unique, so two tags
/// named `home` with different ids are distinct tags.
///
/// Notes embed copies of their tags, so a `Tag` inside a note is the
/// last-known label at note-creation time rather than a live reference.
///
/// # Examples
///
/// ```
/// use quill::domain::{Tag, TagId};
///
/// let tag = Tag::new(TagId::generate(), "  home ").unwrap();
/// assert_eq!(tag.label(), "home");
/// assert!(Tag::new(TagId::generate(), "   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTag")]
pub struct Tag {
    id: TagId,
    label: String,
}

#[derive(Deserialize)]
struct RawTag {
    id: TagId,
    label: String,
}

impl TryFrom<RawTag> for Tag {
    type Error = ParseTagError;

    fn try_from(raw: RawTag) -> Result<Self, Self::Error> {
        Tag::new(raw.id, raw.label)
    }
}

impl Tag {
    /// Creates a tag, trimming the label.
    ///
    /// # Errors
    ///
    /// Returns `ParseTagError` if the label is empty or whitespace-only.
    pub fn new(id: TagId, label: impl AsRef<str>) -> Result<Self, ParseTagError> {
        let label = Self::normalize_label(label.as_ref())?;
        Ok(Self { id, label })
    }

    /// Trims a user-entered label and rejects it if nothing is left.
    pub fn normalize_label(label: &str) -> Result<String, ParseTagError> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Err(ParseTagError("tag label cannot be empty".to_string()));
        }
        Ok(trimmed.to_string())
    }

    /// Returns the tag's id.
    pub fn id(&self) -> &TagId {
        &self.id
    }

    /// Returns the tag's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns true if `label` names this tag, ignoring case and surrounding whitespace.
    pub fn has_label(&self, label: &str) -> bool {
        self.label.to_lowercase() == label.trim().to_lowercase()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag(\"{}\" {})", self.label, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn id(s: &str) -> TagId {
        s.parse().unwrap()
    }

    #[test]
    fn new_trims_label() {
        let tag = Tag::new(id("1"), "  work  ").unwrap();
        assert_eq!(tag.label(), "work");
        assert_eq!(tag.id().as_str(), "1");
    }

    #[test]
    fn new_rejects_empty_label() {
        assert!(Tag::new(id("1"), "").is_err());
        assert!(Tag::new(id("1"), " \t ").is_err());
    }

    #[test]
    fn labels_keep_case_and_spaces() {
        let tag = Tag::new(id("1"), "Needs Review").unwrap();
        assert_eq!(tag.label(), "Needs Review");
    }

    #[test]
    fn has_label_ignores_case() {
        let tag = Tag::new(id("1"), "Home").unwrap();
        assert!(tag.has_label("home"));
        assert!(tag.has_label(" HOME "));
        assert!(!tag.has_label("homework"));
    }

    #[test]
    fn duplicate_labels_with_different_ids_are_distinct() {
        let a = Tag::new(id("1"), "home").unwrap();
        let b = Tag::new(id("2"), "home").unwrap();
        assert_ne!(a, b);

        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn display_shows_label() {
        let tag = Tag::new(id("1"), "home").unwrap();
        assert_eq!(tag.to_string(), "home");
        assert_eq!(format!("{:?}", tag), "Tag(\"home\" 1)");
    }

    #[test]
    fn serde_shape_is_id_and_label() {
        let tag = Tag::new(id("1"), "home").unwrap();
        let json = serde_json::to_value(&tag).unwrap();
        assert_eq!(json, serde_json::json!({"id": "1", "label": "home"}));
    }

    #[test]
    fn deserialize_ignores_transient_fields() {
        let json = r#"{"id": "1", "label": "home", "value": "home"}"#;
        let tag: Tag = serde_json::from_str(json).unwrap();
        assert_eq!(tag, Tag::new(id("1"), "home").unwrap());
    }

    #[test]
    fn deserialize_rejects_empty_label() {
        let json = r#"{"id": "1", "label": "  "}"#;
        assert!(serde_json::from_str::<Tag>(json).is_err());
    }
}
