//! Query matcher over the unified index.
//!
//! Filters the indexed items against a free-text query and an optional set
//! of item-type filters. Matching is plain case-insensitive substring
//! containment against an item's title, content, or any tag; there is no
//! relevance scoring. Results keep index order and are truncated to
//! [`RESULT_LIMIT`].

use tracing::debug;

use crate::index::build_index;
use crate::models::{ItemType, SearchableItem};
use crate::repository::ContentRepository;

/// Hard cap on returned results. Not configurable per call.
pub const RESULT_LIMIT: usize = 10;

/// Search the repository's content for `query`.
///
/// An empty `type_filters` slice means no type restriction. An empty or
/// whitespace-only query returns no results rather than all items; the
/// search surface only shows results once the visitor has typed something.
///
/// Never fails: any input against any repository state yields a (possibly
/// empty) list.
pub fn search_items(
    repo: &dyn ContentRepository,
    query: &str,
    type_filters: &[ItemType],
) -> Vec<SearchableItem> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<SearchableItem> = build_index(repo)
        .into_iter()
        .filter(|item| matches_query(item, &needle) && matches_type(item, type_filters))
        .collect();
    results.truncate(RESULT_LIMIT);

    debug!(query = %needle, results = results.len(), "search");
    results
}

fn matches_query(item: &SearchableItem, needle: &str) -> bool {
    item.title.to_lowercase().contains(needle)
        || item.content.to_lowercase().contains(needle)
        || item.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

fn matches_type(item: &SearchableItem, type_filters: &[ItemType]) -> bool {
    type_filters.is_empty() || type_filters.contains(&item.item_type)
}
