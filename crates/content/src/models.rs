// ABOUTME: Data shapes for blog posts and notes loaded from the content directory.
// ABOUTME: Mirrors the site's content collection schema using native Rust types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value;

use crate::error::ContentError;
use crate::time_parse::parse_content_date;

/// The content collections known to the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Blog,
    Notes,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Blog => "blog",
            Collection::Notes => "notes",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "blog" | "post" | "posts" => Ok(Collection::Blog),
            "notes" | "note" => Ok(Collection::Notes),
            other => Err(format!("unknown collection: {other}")),
        }
    }
}

/// Front matter of a content record.
///
/// Blog posts and notes share one shape; collection-specific fields are
/// optional here and enforced by [`ContentItem::validate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frontmatter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "tags_from_yaml")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub draft: bool,

    // blog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading_time: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,

    // notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<u8>,
}

/// Accepts `tags: [a, b]`, `tags: a` or `tags:` (null).
///
/// Numbers and booleans become strings; nested maps and lists are dropped.
fn tags_from_yaml<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Sequence(entries)) => entries.iter().filter_map(scalar_tag).collect(),
        Some(other) => scalar_tag(&other).into_iter().collect(),
        None => Vec::new(),
    })
}

fn scalar_tag(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// A publishable record: a blog post or a note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Path of the source file relative to its collection directory.
    pub id: String,
    /// URL slug, unique within the collection.
    pub slug: String,
    /// Markdown body without the front matter.
    pub body: String,
    pub collection: Collection,
    pub data: Frontmatter,
}

impl ContentItem {
    pub fn tags(&self) -> &[String] {
        &self.data.tags
    }

    pub fn is_draft(&self) -> bool {
        self.data.draft
    }

    /// Publication date, or `None` when the front matter date is unparseable.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        parse_content_date(&self.data.date)
    }

    /// Checks the collection-specific required fields.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.slug.trim().is_empty() {
            return Err(ContentError::invalid(&self.id, "slug is empty"));
        }
        if self.data.date.trim().is_empty() {
            return Err(ContentError::invalid(&self.id, "date is required"));
        }

        match self.collection {
            Collection::Blog => {
                if self.data.title.as_deref().map_or(true, |t| t.trim().is_empty()) {
                    return Err(ContentError::invalid(&self.id, "blog posts require a title"));
                }
                if self.data.category.as_deref().map_or(true, |c| c.trim().is_empty()) {
                    return Err(ContentError::invalid(&self.id, "blog posts require a category"));
                }
            }
            Collection::Notes => {
                if self.data.topic.as_deref().map_or(true, |t| t.trim().is_empty()) {
                    return Err(ContentError::invalid(&self.id, "notes require a topic"));
                }
                match self.data.importance {
                    Some(1..=5) => {}
                    Some(other) => {
                        return Err(ContentError::invalid(
                            &self.id,
                            format!("importance must be between 1 and 5, got {other}"),
                        ))
                    }
                    None => return Err(ContentError::invalid(&self.id, "notes require an importance")),
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(importance: Option<u8>) -> ContentItem {
        ContentItem {
            id: "n.md".into(),
            slug: "n".into(),
            body: String::new(),
            collection: Collection::Notes,
            data: Frontmatter {
                date: "2024-01-01".into(),
                topic: Some("rust".into()),
                importance,
                ..Default::default()
            },
        }
    }

    #[test]
    fn collection_parses_aliases() {
        assert_eq!("blog".parse::<Collection>(), Ok(Collection::Blog));
        assert_eq!("Notes".parse::<Collection>(), Ok(Collection::Notes));
        assert!("pages".parse::<Collection>().is_err());
    }

    #[test]
    fn tags_accept_scalar_and_null() {
        let fm: Frontmatter = serde_yaml::from_str("date: 2024-01-01\ntags: rust").unwrap();
        assert_eq!(fm.tags, vec!["rust"]);
        let fm: Frontmatter = serde_yaml::from_str("date: 2024-01-01\ntags:").unwrap();
        assert!(fm.tags.is_empty());
        let fm: Frontmatter = serde_yaml::from_str("date: 2024-01-01").unwrap();
        assert!(fm.tags.is_empty());
    }

    #[test]
    fn numeric_and_bool_tags_become_strings() {
        let fm: Frontmatter = serde_yaml::from_str("date: 2024-01-01\ntags: [rust, 2024, true]").unwrap();
        assert_eq!(fm.tags, vec!["rust", "2024", "true"]);
        let fm: Frontmatter = serde_yaml::from_str("date: 2024-01-01\ntags: 2024").unwrap();
        assert_eq!(fm.tags, vec!["2024"]);
    }

    #[test]
    fn nested_tag_entries_are_dropped() {
        let fm: Frontmatter =
            serde_yaml::from_str("date: 2024-01-01\ntags: [rust, {a: b}, [x], ~]").unwrap();
        assert_eq!(fm.tags, vec!["rust"]);
        let fm: Frontmatter = serde_yaml::from_str("date: 2024-01-01\ntags: {a: b}").unwrap();
        assert!(fm.tags.is_empty());
    }

    #[test]
    fn fractional_reading_time() {
        let fm: Frontmatter = serde_yaml::from_str("date: 2024-01-01\nreadingTime: 3.5").unwrap();
        assert_eq!(fm.reading_time, Some(3.5));
        let fm: Frontmatter = serde_yaml::from_str("date: 2024-01-01\nreadingTime: 4").unwrap();
        assert_eq!(fm.reading_time, Some(4.0));
    }

    #[test]
    fn note_importance_must_be_in_range() {
        assert!(note(Some(3)).validate().is_ok());
        assert!(note(Some(0)).validate().is_err());
        assert!(note(Some(6)).validate().is_err());
        assert!(note(None).validate().is_err());
    }

    #[test]
    fn blog_requires_title_and_category() {
        let mut post = ContentItem {
            id: "p.md".into(),
            slug: "p".into(),
            body: String::new(),
            collection: Collection::Blog,
            data: Frontmatter {
                date: "2024-01-01".into(),
                title: Some("Hello".into()),
                ..Default::default()
            },
        };
        assert!(post.validate().is_err());

        post.data.category = Some("dev".into());
        assert!(post.validate().is_ok());

        post.data.title = Some("   ".into());
        assert!(post.validate().is_err());
    }
}
