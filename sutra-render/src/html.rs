//! Per-block HTML rendering.
//!
//! The single rendering boundary for block kinds: one exhaustive match, so
//! adding a kind fails to compile until its rendering is decided.

use sutra_core::Story;
use sutra_types::{Alignment, Block, BlockKind};

/// Render one block to an HTML fragment.
///
/// Alignment renders as an `align-*` class; left alignment is the default
/// and gets no class. All user content is escaped.
pub fn block_html(block: &Block) -> String {
    let align = align_class(block.alignment);
    let text = escape(&block.content);

    match block.kind {
        BlockKind::Heading1 => format!("<h1{align}>{text}</h1>"),
        BlockKind::Heading2 => format!("<h2{align}>{text}</h2>"),
        BlockKind::Heading3 => format!("<h3{align}>{text}</h3>"),
        BlockKind::Paragraph => format!("<p{align}>{text}</p>"),
        BlockKind::Quote => format!("<blockquote{align}>{text}</blockquote>"),
        BlockKind::List => {
            let mut html = format!("<ul{align}>");
            for line in block.content.lines().filter(|l| !l.trim().is_empty()) {
                html.push_str("<li>");
                html.push_str(&escape(line));
                html.push_str("</li>");
            }
            html.push_str("</ul>");
            html
        }
        // Image content is the source URL, not display text.
        BlockKind::Image => format!(
            "<figure{align}><img src=\"{}\" alt=\"\"></figure>",
            escape(&block.content)
        ),
    }
}

/// Render a story's blocks in document order, one fragment per line.
pub fn story_html(story: &Story) -> String {
    story
        .blocks
        .iter()
        .map(block_html)
        .collect::<Vec<_>>()
        .join("\n")
}

fn align_class(alignment: Alignment) -> String {
    match alignment {
        Alignment::Left => String::new(),
        Alignment::Center | Alignment::Right => {
            format!(" class=\"align-{}\"", alignment.as_str())
        }
    }
}

/// Minimal HTML escaping for text and attribute positions.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
