//! The persisted story model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sutra_types::{Block, StoryId};

use crate::document::{Document, DocumentError};
use crate::slug::slugify;

/// One story as it is stored: identity, metadata, and the ordered blocks.
///
/// The blocks travel as a plain sequence; editing happens through
/// [`Document`], which owns the ordering invariants. Saving a story is a
/// whole-document replace keyed by its id, so `Story` carries no partial
/// state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub id: StoryId,
    pub title: String,
    pub blocks: Vec<Block>,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl Story {
    /// Create a story with the seed document (one empty top-level heading).
    ///
    /// The id is the slugified title.
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        let now = Utc::now();
        Self {
            id: StoryId::new(slugify(&title)),
            title,
            blocks: Document::new().blocks().to_vec(),
            created: now,
            updated: now,
        }
    }

    /// Open the story's blocks as an editable document.
    pub fn document(&self) -> Result<Document, DocumentError> {
        Document::from_blocks(self.blocks.clone())
    }

    /// Replace the blocks with an edited document and bump the timestamp.
    pub fn set_document(&mut self, doc: &Document) {
        self.blocks = doc.blocks().to_vec();
        self.updated = Utc::now();
    }
}
