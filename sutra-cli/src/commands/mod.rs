//! CLI command implementations.

pub mod export;
pub mod init;
pub mod prefs;
pub mod story;

pub use export::export_story;
pub use init::init_project;
pub use prefs::{prefs_get, prefs_set};
pub use story::{apply_ops, list_stories, new_story, show_story};
