//! Stateful flows on top of a store: composing a note and looking one up.

mod catalog;
mod detail;
mod draft;

pub use catalog::TagCatalog;
pub use detail::{NoteDetail, fetch_note};
pub use draft::NoteDraft;
