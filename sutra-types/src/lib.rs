//! Shared types for sutra
//!
//! This crate provides common types used across the sutra ecosystem:
//! story and block identifiers, the block content model, and the
//! serializable block operations the editor emits.

use serde::{Deserialize, Serialize};

/// Story identifier (the story's URL slug)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StoryId(pub String);

impl StoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Block identifier
///
/// Stable for the block's lifetime, unique within one story, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockId(pub u64);

impl BlockId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for BlockId {
    fn from(id: u64) -> Self {
        BlockId(id)
    }
}

impl From<BlockId> for u64 {
    fn from(id: BlockId) -> Self {
        id.0
    }
}

/// Kinds of blocks in a story
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Top-level heading
    Heading1,
    /// Section heading
    Heading2,
    /// Subsection heading
    Heading3,
    /// Paragraph of free text
    Paragraph,
    /// Image reference (content holds the URL)
    Image,
    /// Bullet list (one item per content line)
    List,
    /// Pull quote
    Quote,
}

impl BlockKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Heading1 => "heading1",
            BlockKind::Heading2 => "heading2",
            BlockKind::Heading3 => "heading3",
            BlockKind::Paragraph => "paragraph",
            BlockKind::Image => "image",
            BlockKind::List => "list",
            BlockKind::Quote => "quote",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "heading1" => Some(BlockKind::Heading1),
            "heading2" => Some(BlockKind::Heading2),
            "heading3" => Some(BlockKind::Heading3),
            "paragraph" => Some(BlockKind::Paragraph),
            "image" => Some(BlockKind::Image),
            "list" => Some(BlockKind::List),
            "quote" => Some(BlockKind::Quote),
            _ => None,
        }
    }

    /// Whether this kind edits as free text (everything except images)
    pub fn is_text(&self) -> bool {
        !matches!(self, BlockKind::Image)
    }

    pub fn is_heading(&self) -> bool {
        matches!(
            self,
            BlockKind::Heading1 | BlockKind::Heading2 | BlockKind::Heading3
        )
    }
}

/// Horizontal alignment of a block within its container
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

/// One addressable unit of story content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    pub kind: BlockKind,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub alignment: Alignment,
}

impl Block {
    pub fn new(id: BlockId, kind: BlockKind) -> Self {
        Self {
            id,
            kind,
            content: String::new(),
            alignment: Alignment::Left,
        }
    }
}

/// A single mutation of a story's block sequence
///
/// Operations are data so they can travel: the editor contract emits them,
/// the document applies them, and the CLI accepts them as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum BlockOp {
    /// Insert a fresh empty block immediately after the anchor
    InsertAfter {
        anchor: BlockId,
        /// Defaults to a paragraph when omitted on the wire
        #[serde(default = "default_insert_kind")]
        kind: BlockKind,
    },

    /// Remove a block (refused when it would empty the story)
    Delete { id: BlockId },

    /// Replace a block's content
    SetContent { id: BlockId, content: String },

    /// Retype a block in place, keeping content and alignment
    SetKind { id: BlockId, kind: BlockKind },

    /// Re-align a block
    SetAlignment { id: BlockId, alignment: Alignment },
}

fn default_insert_kind() -> BlockKind {
    BlockKind::Paragraph
}
