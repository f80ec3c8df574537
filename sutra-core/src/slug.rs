//! Slug generation for story identifiers.

use std::sync::LazyLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

static HYPHEN_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").expect("static regex"));

/// Convert a story title to a URL-safe slug.
///
/// Lowercases, turns whitespace and underscores into hyphens, drops
/// punctuation while keeping unicode letters, then collapses and trims
/// hyphens.
///
/// # Examples
///
/// ```
/// use sutra_core::slugify;
///
/// assert_eq!(slugify("The Lotus & the Lamp"), "the-lotus-the-lamp");
/// assert_eq!(slugify("  Morning   Teaching  "), "morning-teaching");
/// ```
pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();

    let cleaned: String = lowered
        .graphemes(true)
        .filter_map(|g| {
            let c = g.chars().next()?;
            if c.is_whitespace() || c == '_' || c == '-' {
                Some("-")
            } else if c.is_ascii_alphanumeric() || c.is_alphabetic() {
                Some(g)
            } else {
                None
            }
        })
        .collect();

    HYPHEN_RUNS
        .replace_all(&cleaned, "-")
        .trim_matches('-')
        .to_string()
}
