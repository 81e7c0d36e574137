//! Isolated test environment with temp directory.

use super::{QuillCommand, TestNote};
use quill::domain::{Note, Tag};
use quill::store::{LocalStore, NoteStore, SqliteStore};
use quill::workflow::{NoteDraft, TagCatalog};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary data directory.
///
/// Creates a temp directory that is automatically cleaned up on drop. Config
/// lookups are pointed at an empty directory inside it, so the user's own
/// config never leaks into tests.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    data_dir: PathBuf,
    config_home: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let data_dir = temp_dir.path().join("data");
        let config_home = temp_dir.path().join("config");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data directory");
        std::fs::create_dir_all(&config_home).expect("Failed to create config directory");
        Self {
            _temp_dir: temp_dir,
            data_dir,
            config_home,
        }
    }

    /// Returns the path to the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the path of the SQLite database.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("quill.db")
    }

    /// Returns the path of the local JSON store.
    pub fn json_path(&self) -> PathBuf {
        self.data_dir.join("quill.json")
    }

    /// Opens the SQLite store directly.
    pub fn sqlite(&self) -> SqliteStore {
        SqliteStore::open(&self.db_path()).expect("Failed to open SQLite store")
    }

    /// Opens the local JSON store directly.
    pub fn local(&self) -> LocalStore {
        LocalStore::open(&self.json_path()).expect("Failed to open local store")
    }

    /// Creates a tag in the SQLite store.
    pub fn add_tag(&self, label: &str) -> Tag {
        self.sqlite().create_tag(label).expect("Failed to create tag")
    }

    /// Saves a note to the SQLite store, creating missing tags by label.
    pub fn add_note(&self, test_note: &TestNote) -> Note {
        let mut store = self.sqlite();
        seed_note(&mut store, test_note)
    }

    /// Writes the config file the binary reads.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let dir = self.config_home.join("quill");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        let path = dir.join("config.toml");
        std::fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Creates a QuillCommand configured for this test environment.
    pub fn cmd(&self) -> QuillCommand {
        QuillCommand::new()
            .config_home(&self.config_home)
            .dir(&self.data_dir)
    }

    /// Creates a QuillCommand with no `--dir`, relying on config.
    pub fn cmd_without_dir(&self) -> QuillCommand {
        QuillCommand::new().config_home(&self.config_home)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Saves a test note through the draft workflow.
pub fn seed_note<S: NoteStore>(store: &mut S, test_note: &TestNote) -> Note {
    let mut catalog = TagCatalog::load(&*store).expect("Failed to load tags");
    let payload = test_note.to_new_note();
    let mut draft = NoteDraft::new();
    draft.set_title(payload.title);
    draft.set_description(payload.description);
    for label in test_note.get_tags() {
        match catalog.resolve(label).cloned() {
            Some(tag) => draft.select(tag),
            None => {
                draft
                    .create_tag(&mut *store, &mut catalog, label)
                    .expect("Failed to create tag");
            }
        }
    }
    draft.save(&mut *store).expect("Failed to save note")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_temp_directory() {
        let env = TestEnv::new();
        assert!(env.data_dir().is_dir());
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.data_dir().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], env.data_dir().to_string_lossy());
    }

    #[test]
    fn test_env_add_note_reuses_tags() {
        let env = TestEnv::new();
        let a = env.add_note(&TestNote::new("A").tag("home"));
        let b = env.add_note(&TestNote::new("B").tag("home"));
        assert_eq!(a.tags(), b.tags());
        assert_eq!(env.sqlite().list_tags().unwrap().len(), 1);
    }
}
