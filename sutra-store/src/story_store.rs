//! Story persistence: one JSON file per story, keyed by story id.
//!
//! Saving is an idempotent whole-document replace. There is no partial
//! write or merge; the editor always hands over the complete block
//! sequence.

use std::path::{Path, PathBuf};

use sutra_core::Story;
use sutra_types::StoryId;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("story not found: {0}")]
    NotFound(StoryId),

    #[error("invalid story id: {0}")]
    InvalidId(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Directory-backed story store.
pub struct StoryStore {
    dir: PathBuf,
}

impl StoryStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Replace the stored story with this one.
    pub fn save(&self, story: &Story) -> Result<(), StoreError> {
        let path = self.story_path(&story.id)?;
        let json = serde_json::to_string_pretty(story)?;
        std::fs::write(&path, json)?;
        debug!(id = %story.id, blocks = story.blocks.len(), "saved story");
        Ok(())
    }

    pub fn load(&self, id: &StoryId) -> Result<Story, StoreError> {
        let path = self.story_path(id)?;
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(id.clone()))
            }
            Err(e) => return Err(e.into()),
        };
        let story = serde_json::from_str(&content)?;
        debug!(id = %id, "loaded story");
        Ok(story)
    }

    pub fn exists(&self, id: &StoryId) -> bool {
        self.story_path(id).map(|p| p.exists()).unwrap_or(false)
    }

    /// All stored story ids, sorted.
    pub fn list(&self) -> Result<Vec<StoryId>, StoreError> {
        let mut ids = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                // Dotfiles (e.g. the preference store) are not stories.
                if !stem.starts_with('.') {
                    ids.push(StoryId::new(stem));
                }
            }
        }
        ids.sort();
        Ok(ids)
    }

    pub fn remove(&self, id: &StoryId) -> Result<(), StoreError> {
        let path = self.story_path(id)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(id.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Path for a story id, rejecting ids that would escape the store dir.
    fn story_path(&self, id: &StoryId) -> Result<PathBuf, StoreError> {
        let s = id.as_str();
        if s.is_empty() || s.contains('/') || s.contains('\\') || s.contains("..") {
            return Err(StoreError::InvalidId(s.to_string()));
        }
        Ok(self.dir.join(format!("{s}.json")))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
