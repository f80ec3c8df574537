//! # sutra-render
//!
//! HTML rendering for sutra stories.
//!
//! Per-block rendering happens in [`html`] through one exhaustive match
//! over the block kinds; [`templates`] wraps the result in the story page
//! using Askama.

pub mod html;
pub mod templates;

pub use html::{block_html, story_html};
pub use templates::{render_story_page, RenderError, StoryTemplate};
