use std::fs::{self, File};
use std::io::{ErrorKind, Read, Write};
use std::path::PathBuf;

use crate::models::{Task, Theme};

/// Key holding the JSON-serialized task collection.
pub const TASKS_KEY: &str = "tasks";
/// Key holding the literal theme value string.
pub const THEME_KEY: &str = "theme";

#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(err) => write!(f, "io error: {err}"),
            StorageError::Json(err) => write!(f, "json error: {err}"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        StorageError::Io(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        StorageError::Json(value)
    }
}

/// String key-value store backed by one file per key under a data directory.
/// Writes are atomic (temp file + rename) so a crash mid-write never leaves a
/// half-written value behind.
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn ensure_dirs(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)?;
        Ok(())
    }

    /// Returns `None` when the key has never been written.
    pub fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut file = match File::open(self.root.join(key)) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let mut buf = String::new();
        file.read_to_string(&mut buf)?;
        Ok(Some(buf))
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.root.join(key);
        let temp_path = path.with_extension("tmp");
        {
            let mut file = File::create(&temp_path)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(temp_path, path)?;
        Ok(())
    }

    /// Loads the stored task collection. `Ok(None)` means no data was ever
    /// persisted; a malformed blob surfaces as `Err(Json)` so the caller can
    /// decide between recovery and surfacing.
    pub fn load_tasks(&self) -> Result<Option<Vec<Task>>, StorageError> {
        match self.get(TASKS_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn save_tasks(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(tasks)?;
        self.set(TASKS_KEY, &json)
    }

    /// An unknown stored value is treated the same as an absent one.
    pub fn load_theme(&self) -> Result<Option<Theme>, StorageError> {
        Ok(self.get(THEME_KEY)?.and_then(|raw| Theme::parse(&raw)))
    }

    pub fn save_theme(&self, theme: Theme) -> Result<(), StorageError> {
        self.set(THEME_KEY, theme.as_str())
    }
}
