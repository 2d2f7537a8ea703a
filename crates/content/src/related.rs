// ABOUTME: Tag-overlap ranking for "related posts" lists.
// ABOUTME: Scores a pool against a reference item and returns the top matches in stable order.

use std::collections::HashSet;

use crate::models::ContentItem;

/// Number of related items returned when the caller does not choose a limit.
pub const DEFAULT_RELATED_LIMIT: usize = 5;

/// A candidate paired with its tag-overlap score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub item: &'a ContentItem,
    pub score: usize,
}

/// Scores every candidate in `pool` that shares at least one tag with `reference`.
///
/// The score is the number of distinct tags the candidate shares with the
/// reference, so repeating a tag on either side does not count twice. The
/// candidate with the reference's slug is skipped. Results keep pool order;
/// sorting is left to [`rank_related`].
pub fn score_candidates<'a>(
    reference: &ContentItem,
    pool: &'a [ContentItem],
) -> Vec<ScoredCandidate<'a>> {
    let reference_tags: HashSet<&str> = reference.tags().iter().map(String::as_str).collect();
    if reference_tags.is_empty() {
        return Vec::new();
    }

    pool.iter()
        .filter(|candidate| candidate.slug != reference.slug)
        .filter_map(|candidate| {
            let shared: HashSet<&str> = candidate
                .tags()
                .iter()
                .map(String::as_str)
                .filter(|tag| reference_tags.contains(tag))
                .collect();
            let score = shared.len();
            (score > 0).then_some(ScoredCandidate {
                item: candidate,
                score,
            })
        })
        .collect()
}

/// Returns up to `limit` items from `pool` most related to `reference` by shared tags.
///
/// Ordered by descending score; equal scores keep their pool order. The
/// reference itself and items sharing no tag are never returned.
pub fn rank_related<'a>(
    reference: &ContentItem,
    pool: &'a [ContentItem],
    limit: usize,
) -> Vec<&'a ContentItem> {
    if limit == 0 {
        return Vec::new();
    }

    let mut scored = score_candidates(reference, pool);
    // sort_by is stable
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.into_iter().take(limit).map(|c| c.item).collect()
}

/// [`rank_related`] with [`DEFAULT_RELATED_LIMIT`].
pub fn rank_related_default<'a>(
    reference: &ContentItem,
    pool: &'a [ContentItem],
) -> Vec<&'a ContentItem> {
    rank_related(reference, pool, DEFAULT_RELATED_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Collection, Frontmatter};

    fn item(slug: &str, tags: &[&str]) -> ContentItem {
        ContentItem {
            id: format!("{slug}.md"),
            slug: slug.to_string(),
            body: String::new(),
            collection: Collection::Blog,
            data: Frontmatter {
                date: "2024-01-01".into(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                ..Default::default()
            },
        }
    }

    fn slugs(items: &[&ContentItem]) -> Vec<String> {
        items.iter().map(|i| i.slug.clone()).collect()
    }

    #[test]
    fn ranks_by_shared_tags() {
        let r = item("r", &["a", "b"]);
        let pool = vec![
            r.clone(),
            item("x", &["a", "c"]),
            item("y", &["a", "b"]),
            item("z", &["c", "d"]),
        ];
        assert_eq!(slugs(&rank_related(&r, &pool, 5)), vec!["y", "x"]);
    }

    #[test]
    fn zero_limit_is_empty() {
        let r = item("r", &["a"]);
        let pool = vec![item("x", &["a"])];
        assert!(rank_related(&r, &pool, 0).is_empty());
    }

    #[test]
    fn duplicate_candidate_tags_count_once() {
        let r = item("r", &["a", "b"]);
        let pool = vec![item("dup", &["a", "a", "a"]), item("both", &["a", "b"])];
        let scored = score_candidates(&r, &pool);
        assert_eq!(scored[0].score, 1);
        assert_eq!(scored[1], ScoredCandidate { item: &pool[1], score: 2 });
        assert_eq!(slugs(&rank_related(&r, &pool, 5)), vec!["both", "dup"]);
    }

    #[test]
    fn untagged_reference_has_no_relations() {
        let r = item("r", &[]);
        let pool = vec![item("x", &["a"])];
        assert!(rank_related_default(&r, &pool).is_empty());
    }
}
