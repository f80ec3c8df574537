//! # sutra-core
//!
//! Core library for the sutra story editor.
//!
//! This crate provides the block collection manager (the ordered document
//! model behind the story editor), the gesture-to-operation editor
//! contract, site configuration, and the persisted story model.

pub mod config;
pub mod document;
pub mod editor;
pub mod slug;
pub mod story;

pub use config::{Config, ConfigError};
pub use document::{Document, DocumentError};
pub use editor::{resolve_input, EditorInput};
pub use slug::slugify;
pub use story::Story;
