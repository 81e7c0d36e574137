//! Core types: Note, Tag, their ids, and the filtering engine

mod filter;
mod ids;
mod note;
mod tag;

pub use filter::{NoteQuery, filter_notes};
pub use ids::{NoteId, ParseIdError, TagId};
pub use note::{NewNote, Note, NoteBuilder};
pub use tag::{ParseTagError, Tag};
