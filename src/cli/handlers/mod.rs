//! Command handlers for the CLI.

mod list;
mod new;
mod show;
mod tags;


use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::cli::config::Backend;
use crate::store::{LocalStore, NoteStore, SqliteStore};

// Re-export public items
pub use list::{handle_list, select_notes};
pub use new::{create_note_from_args, handle_new};
pub use show::handle_show;
pub use tags::{handle_tag, handle_tags, tag_counts};

// ===========================================
// Shared Utilities
// ===========================================

/// Returns the data file for a backend inside the data directory.
pub fn store_path(data_dir: &Path, backend: Backend) -> PathBuf {
    match backend {
        Backend::Sqlite => data_dir.join("quill.db"),
        Backend::Local => data_dir.join("quill.json"),
    }
}

/// Opens the configured store.
pub fn open_store(data_dir: &Path, backend: Backend) -> Result<Box<dyn NoteStore>> {
    let path = store_path(data_dir, backend);
    let store: Box<dyn NoteStore> = match backend {
        Backend::Sqlite => Box::new(
            SqliteStore::open(&path)
                .with_context(|| format!("failed to open database at {}", path.display()))?,
        ),
        Backend::Local => Box::new(
            LocalStore::open(&path)
                .with_context(|| format!("failed to open store at {}", path.display()))?,
        ),
    };
    Ok(store)
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

/// First `max_chars` characters of a description on one line, with `...` if cut.
pub(crate) fn preview(description: &str, max_chars: usize) -> String {
    let flat = description.replace(['\n', '\r'], " ");
    if flat.chars().count() <= max_chars {
        flat
    } else {
        let cut: String = flat.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}

/// Comma-separated tag labels.
pub(crate) fn join_labels(tags: &[crate::domain::Tag]) -> String {
    tags.iter()
        .map(|t| t.label())
        .collect::<Vec<_>>()
        .join(", ")
}
