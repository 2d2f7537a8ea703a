// ABOUTME: Content helpers for the blog/notes site.
// ABOUTME: Provides loading, published listings, related posts, meta descriptions, and small utilities.

pub mod collection;
pub mod env;
pub mod error;
pub mod loader;
pub mod models;
pub mod options;
pub mod related;
pub mod seo;
pub mod storage;
pub mod time_parse;
pub mod utils;

pub use collection::{find_by_slug, get_published_blog, get_published_notes, published, sort_newest_first};
pub use env::{Environment, Platform};
pub use error::ContentError;
pub use loader::{load_collection, parse_item, ContentSource, DirectorySource, MemorySource};
pub use models::{Collection, ContentItem, Frontmatter};
pub use options::{SiteOptions, SiteOptionsBuilder};
pub use related::{rank_related, rank_related_default, score_candidates, ScoredCandidate, DEFAULT_RELATED_LIMIT};
pub use seo::{build_description, build_description_with, DescriptionOptions};
pub use storage::{get_stored, remove_stored, set_stored, KeyValueStore, MemoryStore, StoreError};
pub use time_parse::parse_content_date;
pub use utils::{clamp, format_number, generate_id, group_by, safe_json_parse, sort_by, truncate, unique};

// ----------------------------------------------------------------------------
// Page helpers
// ----------------------------------------------------------------------------

/// Related items for the item with `slug`, drawn from the published part of
/// its collection and sized by `opts.related_limit`.
///
/// Returns `Ok(None)` when no published item has that slug.
pub fn related_for_slug(
    source: &impl ContentSource,
    opts: &SiteOptions,
    collection: Collection,
    slug: &str,
) -> Result<Option<Vec<ContentItem>>, ContentError> {
    let items = listing(source, opts, collection)?;
    let Some(reference) = find_by_slug(&items, slug) else {
        return Ok(None);
    };
    let related = rank_related(reference, &items, opts.related_limit)
        .into_iter()
        .cloned()
        .collect();
    Ok(Some(related))
}

/// The listing a page of `collection` shows: published items newest first,
/// or every item (drafts included) when `opts.include_drafts` is set.
pub fn listing(
    source: &impl ContentSource,
    opts: &SiteOptions,
    collection: Collection,
) -> Result<Vec<ContentItem>, ContentError> {
    let items = source.collection(collection)?;
    if opts.include_drafts {
        let mut items = items;
        sort_newest_first(&mut items);
        return Ok(items);
    }
    Ok(published(items))
}
