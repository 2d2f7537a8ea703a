// ABOUTME: Published-content queries over a loaded collection.
// ABOUTME: Filters drafts and orders items newest first for listing pages.

use std::cmp::Reverse;

use crate::error::ContentError;
use crate::loader::ContentSource;
use crate::models::{Collection, ContentItem};

/// Drops drafts and sorts by date, newest first.
///
/// The sort is stable. Items whose date does not parse go after every dated
/// item and keep their relative order.
pub fn published(items: Vec<ContentItem>) -> Vec<ContentItem> {
    let mut items: Vec<ContentItem> = items.into_iter().filter(|item| !item.is_draft()).collect();
    sort_newest_first(&mut items);
    items
}

/// Sorts in place by date, newest first, undated items last.
pub fn sort_newest_first(items: &mut [ContentItem]) {
    items.sort_by_cached_key(|item| {
        let date = item.published_at();
        (date.is_none(), Reverse(date))
    });
}

/// Published blog posts, newest first.
pub fn get_published_blog(source: &impl ContentSource) -> Result<Vec<ContentItem>, ContentError> {
    Ok(published(source.collection(Collection::Blog)?))
}

/// Published notes, newest first.
pub fn get_published_notes(source: &impl ContentSource) -> Result<Vec<ContentItem>, ContentError> {
    Ok(published(source.collection(Collection::Notes)?))
}

pub fn find_by_slug<'a>(items: &'a [ContentItem], slug: &str) -> Option<&'a ContentItem> {
    items.iter().find(|item| item.slug == slug)
}
