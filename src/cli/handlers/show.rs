//! Show command handler.

use anyhow::{Context, Result, bail};

use super::join_labels;
use crate::cli::ShowArgs;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::domain::{Note, NoteId};
use crate::store::NoteStore;
use crate::workflow::NoteDetail;

/// Looks up a note by id.
///
/// # Errors
///
/// Fails when the id is malformed, no note has it, or the store errors.
pub(crate) fn lookup_note(store: &dyn NoteStore, input: &str) -> Result<Note> {
    let id: NoteId = input
        .trim()
        .parse()
        .with_context(|| format!("invalid note id: '{}'", input))?;

    match NoteDetail::load(store, &id) {
        NoteDetail::Found(note) => Ok(note),
        NoteDetail::NotFound(id) => bail!("note not found: '{}'", id),
        NoteDetail::Error(msg) => bail!("error fetching note: {}", msg),
        NoteDetail::Loading => bail!("note lookup did not complete: '{}'", id),
    }
}

pub fn handle_show(args: &ShowArgs, store: &dyn NoteStore) -> Result<()> {
    let note = lookup_note(store, &args.id)?;

    match args.format {
        OutputFormat::Human => {
            println!("# {}", note.title());
            println!();

            if !note.description().is_empty() {
                println!("{}", note.description());
                println!();
            }

            println!(
                "ID: {}  Created: {}",
                note.id(),
                note.created().format("%Y-%m-%d")
            );

            if !note.tags().is_empty() {
                println!("Tags: {}", join_labels(note.tags()));
            }
        }
        OutputFormat::Json => {
            let output = Output::new(NoteListing::from(&note));
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Ids => println!("{}", note.id()),
    }
    Ok(())
}
