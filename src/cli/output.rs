//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::{Note, Tag};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
    /// Plain ids, one per line
    Ids,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A tag as shown in listings.
#[derive(Debug, Serialize)]
pub struct TagListing {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl From<&Tag> for TagListing {
    fn from(tag: &Tag) -> Self {
        Self {
            id: tag.id().to_string(),
            label: tag.label().to_string(),
            count: None,
        }
    }
}

/// A single note in listing output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<TagListing>,
    pub created: String,
}

impl From<&Note> for NoteListing {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id().to_string(),
            title: note.title().to_string(),
            description: note.description().to_string(),
            tags: note.tags().iter().map(TagListing::from).collect(),
            created: note.created().to_rfc3339(),
        }
    }
}
