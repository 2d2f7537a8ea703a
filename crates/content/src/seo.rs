// ABOUTME: Meta description fallback for pages without an explicit description.
// ABOUTME: Uses the front matter description, else a flattened excerpt of the body.

use crate::models::ContentItem;

/// Excerpt length and suffix used when falling back to the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionOptions {
    /// Maximum number of body characters taken before the suffix.
    pub length: usize,
    pub suffix: String,
}

impl Default for DescriptionOptions {
    fn default() -> Self {
        Self {
            length: 120,
            suffix: "...".to_string(),
        }
    }
}

/// Builds the meta description for an item with the default options.
pub fn build_description(item: &ContentItem) -> String {
    build_description_with(item, &DescriptionOptions::default())
}

/// Returns the front matter description when it is non-empty. Otherwise takes
/// the first `opts.length` characters of the body, replaces each run of
/// newlines with a single space, and appends `opts.suffix`.
pub fn build_description_with(item: &ContentItem, opts: &DescriptionOptions) -> String {
    if let Some(desc) = item.data.description.as_deref() {
        if !desc.is_empty() {
            return desc.to_string();
        }
    }

    let excerpt: String = item.body.chars().take(opts.length).collect();
    let mut flattened = collapse_newlines(&excerpt);
    flattened.push_str(&opts.suffix);
    flattened
}

/// Replaces every run of `\n` with one space. Other whitespace is kept.
fn collapse_newlines(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut last_was_newline = false;

    for c in s.chars() {
        if c == '\n' {
            if !last_was_newline {
                result.push(' ');
                last_was_newline = true;
            }
        } else {
            result.push(c);
            last_was_newline = false;
        }
    }

    result
}
