// ABOUTME: Site configuration including the content root, collection directories, and list sizes.
// ABOUTME: SiteOptionsBuilder provides a fluent API for overriding the defaults.

use std::path::{Path, PathBuf};

use crate::models::Collection;
use crate::related::DEFAULT_RELATED_LIMIT;
use crate::seo::DescriptionOptions;

/// Configuration shared by the loader, the related-items picker and the description helper.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteOptions {
    /// Directory holding one subdirectory per collection.
    pub content_root: PathBuf,
    pub blog_dir: String,
    pub notes_dir: String,
    pub related_limit: usize,
    pub description: DescriptionOptions,
    /// Keep drafts in published listings (useful for local previews).
    pub include_drafts: bool,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            content_root: PathBuf::from("src/content"),
            blog_dir: "blog".to_string(),
            notes_dir: "notes".to_string(),
            related_limit: DEFAULT_RELATED_LIMIT,
            description: DescriptionOptions::default(),
            include_drafts: false,
        }
    }
}

impl SiteOptions {
    /// Directory that holds the files of `collection`.
    pub fn collection_dir(&self, collection: Collection) -> PathBuf {
        let name = match collection {
            Collection::Blog => &self.blog_dir,
            Collection::Notes => &self.notes_dir,
        };
        self.content_root.join(name)
    }
}

/// Builder for [`SiteOptions`].
#[derive(Debug, Clone, Default)]
pub struct SiteOptionsBuilder {
    opts: SiteOptions,
}

impl SiteOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content_root(mut self, root: impl AsRef<Path>) -> Self {
        self.opts.content_root = root.as_ref().to_path_buf();
        self
    }

    pub fn blog_dir(mut self, name: impl Into<String>) -> Self {
        self.opts.blog_dir = name.into();
        self
    }

    pub fn notes_dir(mut self, name: impl Into<String>) -> Self {
        self.opts.notes_dir = name.into();
        self
    }

    pub fn related_limit(mut self, limit: usize) -> Self {
        self.opts.related_limit = limit;
        self
    }

    pub fn description_length(mut self, length: usize) -> Self {
        self.opts.description.length = length;
        self
    }

    pub fn description_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.opts.description.suffix = suffix.into();
        self
    }

    pub fn include_drafts(mut self, include: bool) -> Self {
        self.opts.include_drafts = include;
        self
    }

    pub fn build(self) -> SiteOptions {
        self.opts
    }
}
