//! Askama template definitions.

use askama::Template;
use sutra_core::Story;
use thiserror::Error;

use crate::html::story_html;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),
}

/// Story page template
#[derive(Template)]
#[template(path = "story.html")]
pub struct StoryTemplate {
    /// Page title (the story title)
    pub title: String,
    /// Publication date, already formatted for display
    pub published: String,
    /// Pre-rendered block fragments (inserted unescaped)
    pub body_html: String,
}

/// Render a full story page.
pub fn render_story_page(story: &Story) -> Result<String, RenderError> {
    let template = StoryTemplate {
        title: story.title.clone(),
        published: story.created.format("%Y-%m-%d").to_string(),
        body_html: story_html(story),
    };
    Ok(template.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sutra_types::BlockKind;

    #[test]
    fn test_story_page_contains_title_and_blocks() {
        let mut story = Story::new("Lamp & Lotus");
        let doc = story.document().unwrap();
        let first = doc.first_id();
        let doc = doc
            .update_content(first, "Lamp & Lotus")
            .insert_after(first, BlockKind::Quote);
        let quote = doc.blocks()[1].id;
        let doc = doc.update_content(quote, "A lamp for the path");
        story.set_document(&doc);

        let page = render_story_page(&story).unwrap();
        // Title is escaped by askama, block content by the fragment renderer.
        assert!(page.contains("<title>Lamp &amp; Lotus</title>"));
        assert!(page.contains("<h1>Lamp &amp; Lotus</h1>"));
        assert!(page.contains("<blockquote>A lamp for the path</blockquote>"));
    }
}
