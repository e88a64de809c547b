//! JSON-file-backed preference store.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use super::{PreferenceStore, StoreError};

/// A [`PreferenceStore`] persisting a flat string map as JSON.
///
/// A missing file reads as empty. Writes create the parent directory as
/// needed and rewrite the whole file; a corrupt file is replaced on the next
/// write rather than wedging every write after it.
///
/// # Example
///
/// ```rust,no_run
/// use dimmer::{FileStore, PreferenceStore};
///
/// let mut store = FileStore::in_config_dir("my-app")?;
/// store.set("theme-preference", "dark")?;
/// assert_eq!(store.get("theme-preference")?.as_deref(), Some("dark"));
/// # Ok::<(), dimmer::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store under the platform config directory for `app`,
    /// e.g. `~/.config/<app>/preferences.json` on Linux.
    pub fn in_config_dir(app: &str) -> Result<Self, StoreError> {
        let dirs = ProjectDirs::from("", "", app).ok_or(StoreError::ConfigDirUnavailable)?;
        Ok(Self::new(dirs.config_dir().join("preferences.json")))
    }

    /// The file backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(StoreError::Io(err)),
        };
        serde_json::from_str(&raw).map_err(StoreError::Malformed)
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = match self.load() {
            Ok(entries) => entries,
            // Unreadable JSON is abandoned; i/o failures still propagate.
            Err(StoreError::Malformed(_)) => BTreeMap::new(),
            Err(err) => return Err(err),
        };
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&entries).map_err(StoreError::Malformed)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
