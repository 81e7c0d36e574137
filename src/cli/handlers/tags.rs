//! Tag registry command handlers (tags, tag).

use anyhow::{Context, Result};
use std::collections::HashMap;

use crate::cli::output::{Output, OutputFormat, TagListing};
use crate::cli::{TagArgs, TagsArgs};
use crate::domain::{Note, TagId};
use crate::store::NoteStore;

/// Counts notes per embedded tag id.
pub fn tag_counts(notes: &[Note]) -> HashMap<&TagId, usize> {
    let mut counts = HashMap::new();
    for note in notes {
        for tag in note.tags() {
            *counts.entry(tag.id()).or_insert(0) += 1;
        }
    }
    counts
}

pub fn handle_tags(args: &TagsArgs, store: &dyn NoteStore) -> Result<()> {
    let tags = store.list_tags().context("failed to list tags")?;
    let notes = if args.counts {
        store.list_notes().context("failed to list notes")?
    } else {
        Vec::new()
    };
    let counts = tag_counts(&notes);
    let count_of = |id: &TagId| counts.get(id).copied().unwrap_or(0);

    match args.format {
        OutputFormat::Human => {
            if tags.is_empty() {
                println!("No tags found.");
            } else {
                for t in &tags {
                    if args.counts {
                        println!("{}  {} ({})", t.id(), t.label(), count_of(t.id()));
                    } else {
                        println!("{}  {}", t.id(), t.label());
                    }
                }
            }
        }
        OutputFormat::Json => {
            let listings: Vec<TagListing> = tags
                .iter()
                .map(|t| TagListing {
                    count: args.counts.then(|| count_of(t.id())),
                    ..TagListing::from(t)
                })
                .collect();
            let out = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Ids => {
            for t in &tags {
                println!("{}", t.id());
            }
        }
    }
    Ok(())
}

pub fn handle_tag(args: &TagArgs, store: &mut dyn NoteStore) -> Result<()> {
    let tag = store
        .create_tag(&args.label)
        .with_context(|| format!("failed to create tag '{}'", args.label))?;

    match args.format {
        OutputFormat::Human => println!("Created tag '{}' [{}]", tag.label(), tag.id()),
        OutputFormat::Json => {
            let out = Output::new(TagListing::from(&tag));
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Ids => println!("{}", tag.id()),
    }
    Ok(())
}
