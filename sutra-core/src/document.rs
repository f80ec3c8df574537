//! The block collection manager: an ordered sequence of typed blocks.
//!
//! A [`Document`] is the in-memory model behind one story editing session.
//! Mutations are immutable updates: each returns a new `Document`, and every
//! invalid target (an id that is not present, a delete that would empty the
//! document) returns a value deep-equal to the input. Callers never see an
//! error from a mutation; the editing surface is deliberately forgiving.
//!
//! Two invariants hold at all times:
//! - the sequence is never empty
//! - block ids are pairwise distinct and never reused

use serde::{Deserialize, Serialize};
use sutra_types::{Alignment, Block, BlockId, BlockKind, BlockOp};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("a document must contain at least one block")]
    Empty,

    #[error("duplicate block id: {0:?}")]
    DuplicateId(BlockId),
}

/// Ordered sequence of blocks plus the id counter for new blocks.
///
/// Insertion order is display order. New blocks are created only via
/// [`Document::insert_after`]; arbitrary positioning is expressed as
/// repeated insert-after.
///
/// Deserialization goes through the same validation as
/// [`Document::from_blocks`], so serialized data cannot smuggle in an empty
/// sequence or duplicate ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DocumentRepr")]
pub struct Document {
    blocks: Vec<Block>,
    next_id: u64,
}

/// Wire shape of a document, validated before it becomes a [`Document`].
#[derive(Deserialize)]
struct DocumentRepr {
    blocks: Vec<Block>,
    next_id: u64,
}

impl TryFrom<DocumentRepr> for Document {
    type Error = DocumentError;

    fn try_from(repr: DocumentRepr) -> Result<Self, Self::Error> {
        let mut doc = Document::from_blocks(repr.blocks)?;
        // Trust a larger stored counter so ids deleted before the save stay
        // retired forever.
        doc.next_id = doc.next_id.max(repr.next_id);
        Ok(doc)
    }
}

impl Document {
    /// Create a document with its seed block: an empty top-level heading.
    pub fn new() -> Self {
        Self {
            blocks: vec![Block::new(BlockId(1), BlockKind::Heading1)],
            next_id: 2,
        }
    }

    /// Rebuild a document from externally supplied blocks.
    ///
    /// Unlike the interactive mutations this validates: an empty sequence or
    /// a duplicated id is a caller bug, not a gesture to forgive. The id
    /// counter resumes above the highest existing id so ids are never reused
    /// across a save/load cycle.
    pub fn from_blocks(blocks: Vec<Block>) -> Result<Self, DocumentError> {
        if blocks.is_empty() {
            return Err(DocumentError::Empty);
        }
        let mut seen = std::collections::HashSet::new();
        for block in &blocks {
            if !seen.insert(block.id) {
                return Err(DocumentError::DuplicateId(block.id));
            }
        }
        let max_id = blocks.iter().map(|b| b.id.as_u64()).max().unwrap_or(0);
        Ok(Self {
            blocks,
            next_id: max_id + 1,
        })
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always false: the never-empty invariant holds by construction.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Index of the block in display order.
    pub fn position(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    pub fn first_id(&self) -> BlockId {
        self.blocks[0].id
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Insert a fresh block immediately after the anchor.
    ///
    /// The new block gets a never-before-used id, empty content, and left
    /// alignment. Inserting after the last block appends. A missing anchor
    /// is a silent no-op.
    pub fn insert_after(&self, anchor: BlockId, kind: BlockKind) -> Document {
        let Some(index) = self.position(anchor) else {
            return self.clone();
        };
        let mut next = self.clone();
        let block = Block::new(BlockId(next.next_id), kind);
        next.next_id += 1;
        next.blocks.insert(index + 1, block);
        next
    }

    /// Remove a block. Content is discarded, never merged into a neighbor.
    ///
    /// No-op when the id is missing or when removal would leave the document
    /// empty.
    pub fn delete(&self, id: BlockId) -> Document {
        if self.blocks.len() <= 1 {
            return self.clone();
        }
        let Some(index) = self.position(id) else {
            return self.clone();
        };
        let mut next = self.clone();
        next.blocks.remove(index);
        next
    }

    /// Replace a block's content. No-op when the id is missing.
    pub fn update_content(&self, id: BlockId, content: &str) -> Document {
        self.update_block(id, |block| block.content = content.to_string())
    }

    /// Retype a block in place; id, content, and alignment are preserved.
    pub fn change_kind(&self, id: BlockId, kind: BlockKind) -> Document {
        self.update_block(id, |block| block.kind = kind)
    }

    /// Re-align a block. No-op when the id is missing.
    pub fn change_alignment(&self, id: BlockId, alignment: Alignment) -> Document {
        self.update_block(id, |block| block.alignment = alignment)
    }

    /// Apply one serialized operation.
    pub fn apply(&self, op: &BlockOp) -> Document {
        match op {
            BlockOp::InsertAfter { anchor, kind } => self.insert_after(*anchor, *kind),
            BlockOp::Delete { id } => self.delete(*id),
            BlockOp::SetContent { id, content } => self.update_content(*id, content),
            BlockOp::SetKind { id, kind } => self.change_kind(*id, *kind),
            BlockOp::SetAlignment { id, alignment } => self.change_alignment(*id, *alignment),
        }
    }

    fn update_block(&self, id: BlockId, f: impl FnOnce(&mut Block)) -> Document {
        let Some(index) = self.position(id) else {
            return self.clone();
        };
        let mut next = self.clone();
        f(&mut next.blocks[index]);
        next
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with(kinds: &[BlockKind]) -> Document {
        let mut doc = Document::new();
        doc = doc.change_kind(doc.first_id(), kinds[0]);
        for kind in &kinds[1..] {
            let last = doc.blocks().last().unwrap().id;
            doc = doc.insert_after(last, *kind);
        }
        doc
    }

    #[test]
    fn test_new_document_has_seed_heading() {
        let doc = Document::new();
        assert_eq!(doc.len(), 1);
        let seed = &doc.blocks()[0];
        assert_eq!(seed.kind, BlockKind::Heading1);
        assert_eq!(seed.content, "");
        assert_eq!(seed.alignment, Alignment::Left);
    }

    #[test]
    fn test_insert_after_places_immediately_after_anchor() {
        let doc = doc_with(&[
            BlockKind::Heading1,
            BlockKind::Paragraph,
            BlockKind::Paragraph,
        ]);
        let first = doc.first_id();
        let before: Vec<BlockId> = doc.blocks().iter().map(|b| b.id).collect();

        let next = doc.insert_after(first, BlockKind::Quote);
        assert_eq!(next.len(), 4);
        assert_eq!(next.position(first), Some(0));
        assert_eq!(next.blocks()[1].kind, BlockKind::Quote);
        assert_eq!(next.blocks()[1].content, "");
        // Everything after the anchor shifted right by one.
        assert_eq!(next.blocks()[2].id, before[1]);
        assert_eq!(next.blocks()[3].id, before[2]);
    }

    #[test]
    fn test_insert_after_last_appends() {
        let doc = Document::new();
        let next = doc.insert_after(doc.first_id(), BlockKind::Paragraph);
        assert_eq!(next.len(), 2);
        assert_eq!(next.blocks()[1].kind, BlockKind::Paragraph);
    }

    #[test]
    fn test_insert_after_missing_anchor_is_noop() {
        let doc = doc_with(&[BlockKind::Heading1, BlockKind::Paragraph]);
        let next = doc.insert_after(BlockId(999), BlockKind::Paragraph);
        assert_eq!(next, doc);
    }

    #[test]
    fn test_ids_are_unique_and_never_reused() {
        let mut doc = Document::new();
        for _ in 0..10 {
            let last = doc.blocks().last().unwrap().id;
            doc = doc.insert_after(last, BlockKind::Paragraph);
        }
        // Delete a few, insert more: no id comes back.
        let removed: Vec<BlockId> = doc.blocks()[2..5].iter().map(|b| b.id).collect();
        for id in &removed {
            doc = doc.delete(*id);
        }
        for _ in 0..5 {
            let last = doc.blocks().last().unwrap().id;
            doc = doc.insert_after(last, BlockKind::Paragraph);
        }
        let ids: Vec<u64> = doc.blocks().iter().map(|b| b.id.as_u64()).collect();
        let mut deduped = ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
        for id in removed {
            assert!(doc.get(id).is_none());
        }
    }

    #[test]
    fn test_delete_middle_block() {
        let doc = doc_with(&[
            BlockKind::Heading1,
            BlockKind::Paragraph,
            BlockKind::Quote,
        ]);
        let middle = doc.blocks()[1].id;
        let next = doc.delete(middle);
        assert_eq!(next.len(), 2);
        assert_eq!(next.blocks()[0].id, doc.blocks()[0].id);
        assert_eq!(next.blocks()[1].id, doc.blocks()[2].id);
    }

    #[test]
    fn test_delete_last_remaining_block_is_refused() {
        let doc = Document::new();
        let next = doc.delete(doc.first_id());
        assert_eq!(next, doc);
        assert_eq!(next.len(), 1);
    }

    #[test]
    fn test_delete_never_empties_under_any_sequence() {
        let mut doc = doc_with(&[
            BlockKind::Heading1,
            BlockKind::Paragraph,
            BlockKind::List,
            BlockKind::Quote,
        ]);
        let ids: Vec<BlockId> = doc.blocks().iter().map(|b| b.id).collect();
        for id in ids {
            doc = doc.delete(id);
            assert!(doc.len() >= 1);
        }
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_update_content() {
        let doc = Document::new();
        let id = doc.first_id();
        let next = doc.update_content(id, "In the beginning");
        assert_eq!(next.get(id).unwrap().content, "In the beginning");
        // Original untouched.
        assert_eq!(doc.get(id).unwrap().content, "");
    }

    #[test]
    fn test_change_kind_preserves_everything_else() {
        let doc = Document::new()
            .update_content(BlockId(1), "verse")
            .change_alignment(BlockId(1), Alignment::Center);
        let next = doc.change_kind(BlockId(1), BlockKind::Quote);
        let block = next.get(BlockId(1)).unwrap();
        assert_eq!(block.kind, BlockKind::Quote);
        assert_eq!(block.content, "verse");
        assert_eq!(block.alignment, Alignment::Center);
        assert_eq!(block.id, BlockId(1));
    }

    #[test]
    fn test_change_alignment_is_idempotent() {
        let doc = Document::new();
        let once = doc.change_alignment(doc.first_id(), Alignment::Center);
        let twice = once.change_alignment(once.first_id(), Alignment::Center);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_missing_id_mutations_are_identity() {
        let doc = doc_with(&[BlockKind::Heading1, BlockKind::Paragraph]);
        let ghost = BlockId(404);
        assert_eq!(doc.update_content(ghost, "x"), doc);
        assert_eq!(doc.change_kind(ghost, BlockKind::Quote), doc);
        assert_eq!(doc.change_alignment(ghost, Alignment::Right), doc);
        assert_eq!(doc.delete(ghost), doc);
    }

    #[test]
    fn test_apply_dispatches_ops() {
        let doc = Document::new();
        let id = doc.first_id();
        let next = doc
            .apply(&BlockOp::SetContent {
                id,
                content: "Opening".to_string(),
            })
            .apply(&BlockOp::InsertAfter {
                anchor: id,
                kind: BlockKind::Paragraph,
            })
            .apply(&BlockOp::SetAlignment {
                id,
                alignment: Alignment::Center,
            });
        assert_eq!(next.len(), 2);
        assert_eq!(next.get(id).unwrap().content, "Opening");
        assert_eq!(next.get(id).unwrap().alignment, Alignment::Center);
    }

    #[test]
    fn test_from_blocks_rejects_empty_and_duplicates() {
        assert!(matches!(
            Document::from_blocks(vec![]),
            Err(DocumentError::Empty)
        ));

        let dup = vec![
            Block::new(BlockId(1), BlockKind::Heading1),
            Block::new(BlockId(1), BlockKind::Paragraph),
        ];
        assert!(matches!(
            Document::from_blocks(dup),
            Err(DocumentError::DuplicateId(BlockId(1)))
        ));
    }

    #[test]
    fn test_deserialize_rejects_invariant_violations() {
        let empty = serde_json::from_str::<Document>(r#"{"blocks": [], "next_id": 1}"#);
        assert!(empty.is_err());

        let dup = serde_json::from_str::<Document>(
            r#"{"blocks": [{"id": 1, "kind": "paragraph"}, {"id": 1, "kind": "quote"}], "next_id": 5}"#,
        );
        assert!(dup.is_err());
    }

    #[test]
    fn test_serialize_roundtrip_keeps_retired_ids_retired() {
        // Insert then delete: id 2 is retired but the counter is past it.
        let doc = Document::new()
            .insert_after(BlockId(1), BlockKind::Paragraph)
            .delete(BlockId(2));

        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);

        let next = back.insert_after(back.first_id(), BlockKind::Quote);
        assert_eq!(next.blocks()[1].id, BlockId(3));
    }

    #[test]
    fn test_from_blocks_resumes_id_counter() {
        let blocks = vec![
            Block::new(BlockId(3), BlockKind::Heading1),
            Block::new(BlockId(7), BlockKind::Paragraph),
        ];
        let doc = Document::from_blocks(blocks).unwrap();
        let next = doc.insert_after(BlockId(7), BlockKind::Paragraph);
        assert_eq!(next.blocks()[2].id, BlockId(8));
    }
}
