//! Builder for test notes with sensible defaults.

use quill::domain::NewNote;

/// Builder for notes seeded straight into a store.
///
/// Tags are given by label; the environment resolves them against the
/// registry and creates any that are missing.
#[derive(Debug, Clone)]
pub struct TestNote {
    title: String,
    description: String,
    tags: Vec<String>,
}

impl TestNote {
    /// Creates a new test note with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            tags: Vec::new(),
        }
    }

    /// Adds a tag label to the note.
    pub fn tag(mut self, label: impl Into<String>) -> Self {
        self.tags.push(label.into());
        self
    }

    /// Sets the description.
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Returns the title.
    pub fn get_title(&self) -> &str {
        &self.title
    }

    /// Returns the tag labels.
    pub fn get_tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the payload without tags; the environment fills them in.
    pub fn to_new_note(&self) -> NewNote {
        NewNote::new(self.title.clone(), self.description.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_builder() {
        let note = TestNote::new("Groceries")
            .description("milk")
            .tag("home")
            .tag("errands");
        assert_eq!(note.get_title(), "Groceries");
        assert_eq!(note.get_tags(), &["home", "errands"]);
        assert_eq!(note.to_new_note().description, "milk");
    }
}
