//! New note command handler.

use anyhow::{Context, Result};

use crate::cli::NewArgs;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::domain::Note;
use crate::store::NoteStore;
use crate::workflow::{NoteDraft, TagCatalog};

/// Builds a draft from the arguments and saves it.
///
/// Each `--tag` resolves by id, then by label; anything else becomes a new
/// tag. Tags created here stay in the registry even if the save fails.
///
/// # Errors
///
/// Returns an error if:
/// - Title and description are both blank
/// - A new tag label is blank
/// - The store fails
pub fn create_note_from_args(store: &mut dyn NoteStore, args: &NewArgs) -> Result<Note> {
    let mut catalog = TagCatalog::load(&*store).context("failed to list tags")?;
    let mut draft = NoteDraft::new();
    draft.set_title(args.title.trim());
    draft.set_description(args.desc.clone().unwrap_or_default());

    for input in &args.tags {
        match catalog.resolve(input).cloned() {
            Some(tag) => draft.select(tag),
            None => {
                draft
                    .create_tag(&mut *store, &mut catalog, input)
                    .with_context(|| format!("failed to create tag '{}'", input))?;
            }
        }
    }

    draft.save(&mut *store).context("failed to save note")
}

pub fn handle_new(args: &NewArgs, store: &mut dyn NoteStore) -> Result<()> {
    let note = create_note_from_args(store, args)?;

    match args.format {
        OutputFormat::Human => println!("Created: {}", note),
        OutputFormat::Json => {
            let output = Output::new(NoteListing::from(&note));
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Ids => println!("{}", note.id()),
    }
    Ok(())
}
