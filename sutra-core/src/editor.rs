//! Gesture-to-operation contract for the editing surface.
//!
//! The host UI reports what the user did on the focused block; this module
//! decides which [`BlockOp`] (if any) that gesture means. Everything here is
//! pure and total: an unknown id or an inapplicable gesture resolves to
//! `None`, never an error.

use sutra_types::{BlockId, BlockKind, BlockOp};

use crate::document::Document;

/// An editing gesture on the focused block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorInput {
    /// Commit the current block and continue writing below it
    /// (conventionally the return key without a modifier).
    Advance,

    /// Erase at the start of the block
    /// (conventionally backspace at position zero).
    CollapseAtStart,

    /// Pick a new image for an image block.
    ReplaceImage(String),
}

/// Resolve a gesture on `current` into the operation it stands for.
///
/// - `Advance` always continues with a fresh paragraph, whatever the
///   current block's kind.
/// - `CollapseAtStart` deletes the block only when its content is empty and
///   it is not the first block. The first block is exempt: position zero is
///   protected from collapse-to-delete even when later blocks exist.
/// - `ReplaceImage` is the image kind's editing affordance; text kinds
///   ignore it.
pub fn resolve_input(doc: &Document, current: BlockId, input: EditorInput) -> Option<BlockOp> {
    let position = doc.position(current)?;
    let block = doc.get(current)?;

    match input {
        EditorInput::Advance => Some(BlockOp::InsertAfter {
            anchor: current,
            kind: BlockKind::Paragraph,
        }),
        EditorInput::CollapseAtStart => {
            if position == 0 || !block.content.is_empty() {
                return None;
            }
            Some(BlockOp::Delete { id: current })
        }
        EditorInput::ReplaceImage(url) => {
            // Text kinds edit as free text; replacement is the image affordance.
            if block.kind.is_text() {
                return None;
            }
            Some(BlockOp::SetContent {
                id: current,
                content: url,
            })
        }
    }
}
