//! UI preference store.
//!
//! Process-wide preference state (sidebar open, expanded admin groups and
//! the like) with a load-on-start, persist-on-change lifecycle. This is
//! preference state, not domain state: it lives outside the document model
//! entirely.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum PrefError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed preference file: {0}")]
    Serde(#[from] serde_json::Error),
}

/// String key-value preferences backed by one JSON file.
///
/// A missing file is an empty store. Every `set`/`remove` persists
/// immediately.
pub struct PrefStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl PrefStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PrefError> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, values })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Write the change to disk first; memory only moves once the write
    /// succeeded, so a failed persist leaves the store matching the file.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<(), PrefError> {
        let mut next = self.values.clone();
        next.insert(key.into(), value.into());
        self.persist(&next)?;
        self.values = next;
        Ok(())
    }

    pub fn remove(&mut self, key: &str) -> Result<(), PrefError> {
        if !self.values.contains_key(key) {
            return Ok(());
        }
        let mut next = self.values.clone();
        next.remove(key);
        self.persist(&next)?;
        self.values = next;
        Ok(())
    }

    fn persist(&self, values: &BTreeMap<String, String>) -> Result<(), PrefError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(values)?;
        std::fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), entries = values.len(), "persisted prefs");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
