//! # sutra-store
//!
//! On-disk storage for sutra: the story store (whole-document JSON writes
//! keyed by story id) and the UI preference store.

pub mod prefs;
pub mod story_store;

pub use prefs::{PrefError, PrefStore};
pub use story_store::{StoreError, StoryStore};
