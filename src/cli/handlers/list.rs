//! List command handler.

use anyhow::{Context, Result};

use super::{join_labels, preview, truncate_str};
use crate::cli::ListArgs;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::domain::{Note, NoteQuery};
use crate::store::NoteStore;
use crate::workflow::TagCatalog;

/// Loads every note and narrows it to those matching the arguments.
///
/// Each `--tag` is resolved against the registry by id, then by label.
///
/// # Errors
///
/// Fails if the store can't be read or a `--tag` matches no tag.
pub fn select_notes(store: &dyn NoteStore, args: &ListArgs) -> Result<Vec<Note>> {
    let notes = store.list_notes().context("failed to list notes")?;

    let mut query = NoteQuery::new();
    if let Some(title) = &args.title {
        query = query.title(title.clone());
    }

    if !args.tags.is_empty() {
        let catalog = TagCatalog::load(store).context("failed to list tags")?;
        for input in &args.tags {
            let tag = catalog
                .resolve(input)
                .with_context(|| format!("unknown tag: '{}'", input))?;
            query = query.tag(tag.clone());
        }
    }

    Ok(query.filter(&notes))
}

pub fn handle_list(args: &ListArgs, store: &dyn NoteStore) -> Result<()> {
    let notes = select_notes(store, args)?;

    match args.format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("No notes found.");
            } else {
                println!(
                    "{:<26}  {:<30}  {:<20}  {}",
                    "ID", "Title", "Tags", "Description"
                );
                println!(
                    "{:<26}  {:<30}  {:<20}  {}",
                    "-".repeat(26),
                    "-".repeat(30),
                    "-".repeat(20),
                    "-----------"
                );

                for note in &notes {
                    println!(
                        "{:<26}  {:<30}  {:<20}  {}",
                        note.id(),
                        truncate_str(note.title(), 30),
                        truncate_str(&join_labels(note.tags()), 20),
                        preview(note.description(), 50)
                    );
                }

                println!();
                println!("{} note(s)", notes.len());
            }
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes.iter().map(NoteListing::from).collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Ids => {
            for note in &notes {
                println!("{}", note.id());
            }
        }
    }

    Ok(())
}
