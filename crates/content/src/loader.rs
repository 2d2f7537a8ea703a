// ABOUTME: Reads Markdown files with YAML front matter into ContentItem records.
// ABOUTME: Provides the ContentSource trait with directory-backed and in-memory implementations.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::ContentError;
use crate::models::{Collection, ContentItem, Frontmatter};
use crate::options::SiteOptions;

const FRONT_MATTER_FENCE: &str = "---";
const CONTENT_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Something that can hand out the records of a collection.
pub trait ContentSource {
    fn collection(&self, collection: Collection) -> Result<Vec<ContentItem>, ContentError>;
}

/// Loads collections from `<content_root>/<collection dir>` on every call.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    opts: SiteOptions,
}

impl DirectorySource {
    pub fn new(opts: SiteOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &SiteOptions {
        &self.opts
    }
}

impl ContentSource for DirectorySource {
    fn collection(&self, collection: Collection) -> Result<Vec<ContentItem>, ContentError> {
        load_collection(&self.opts.collection_dir(collection), collection)
    }
}

/// Records that are already in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    items: Vec<ContentItem>,
}

impl MemorySource {
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self { items }
    }
}

impl ContentSource for MemorySource {
    fn collection(&self, collection: Collection) -> Result<Vec<ContentItem>, ContentError> {
        Ok(self
            .items
            .iter()
            .filter(|item| item.collection == collection)
            .cloned()
            .collect())
    }
}

/// Parses one content file.
///
/// `id` is the file path relative to its collection directory. The slug is
/// the front matter `slug` when set, otherwise `id` without its extension.
pub fn parse_item(source: &str, id: &str, collection: Collection) -> Result<ContentItem, ContentError> {
    let (yaml, body) = split_front_matter(source)
        .ok_or_else(|| ContentError::parse(id, "missing front matter block"))?;

    let data: Frontmatter = serde_yaml::from_str(yaml).map_err(|e| ContentError::parse(id, e))?;

    let slug = match data.slug.as_deref().map(str::trim) {
        Some(custom) if !custom.is_empty() => custom.to_string(),
        _ => slug_from_id(id),
    };

    let item = ContentItem {
        id: id.to_string(),
        slug,
        body: body.to_string(),
        collection,
        data,
    };
    item.validate()?;
    Ok(item)
}

/// Loads every content file below `dir`, in path order.
///
/// A missing directory is an empty collection. Two files with the same slug
/// are an error.
pub fn load_collection(dir: &Path, collection: Collection) -> Result<Vec<ContentItem>, ContentError> {
    if !dir.exists() {
        warn!(dir = %dir.display(), %collection, "collection directory not found");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    collect_files(dir, &mut files)?;
    files.sort();

    let mut items = Vec::with_capacity(files.len());
    let mut seen: HashMap<String, String> = HashMap::new();

    for path in files {
        let id = relative_id(dir, &path);
        let source = fs::read_to_string(&path).map_err(|e| ContentError::io(&path, e))?;
        let item = parse_item(&source, &id, collection)?;

        if let Some(first) = seen.insert(item.slug.clone(), id.clone()) {
            return Err(ContentError::DuplicateSlug {
                slug: item.slug,
                first,
                second: id,
            });
        }

        debug!(%id, slug = %item.slug, draft = item.is_draft(), "loaded content item");
        items.push(item);
    }

    debug!(%collection, count = items.len(), "loaded collection");
    Ok(items)
}

fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), ContentError> {
    let entries = fs::read_dir(dir).map_err(|e| ContentError::io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| ContentError::io(dir, e))?;
        let path = entry.path();
        if path.is_dir() {
            collect_files(&path, out)?;
        } else if is_content_file(&path) {
            out.push(path);
        }
    }
    Ok(())
}

fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| CONTENT_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn relative_id(dir: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(dir).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn slug_from_id(id: &str) -> String {
    match id.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.contains('/') => stem.to_string(),
        _ => id.to_string(),
    }
}

/// Splits `---` fenced YAML from the body. Returns `None` when the text does
/// not open with a fence or the fence is never closed.
fn split_front_matter(source: &str) -> Option<(&str, &str)> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let first_line_end = source.find('\n')?;
    if source[..first_line_end].trim_end() != FRONT_MATTER_FENCE {
        return None;
    }

    let rest = &source[first_line_end + 1..];
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FRONT_MATTER_FENCE {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((yaml, body.trim_start_matches(['\r', '\n'])));
        }
        offset += line.len();
    }

    None
}
