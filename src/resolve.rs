//! Bookmark resolution: stored slot values against the live page index.
//!
//! Slots hold whatever the host persisted — possibly empty, possibly a path
//! whose page has since been renamed or unpublished. Resolution keeps only the
//! slots whose trimmed value is still a live index key; everything else
//! silently disappears from the menu. Stale bookmarks are not an error state,
//! they are just not shown.

use crate::index::PathIndex;
use crate::types::ResolvedBookmark;

/// Resolve stored slot values into renderable bookmarks, preserving slot order.
///
/// Each value is trimmed; empty and unresolvable values are dropped. The
/// output is never longer than `slot_values` and never reordered.
pub fn resolve(slot_values: &[Option<String>], index: &PathIndex) -> Vec<ResolvedBookmark> {
    let mut bookmarks = Vec::new();
    for value in slot_values {
        let url = value.as_deref().map(str::trim).unwrap_or("");
        if url.is_empty() {
            continue;
        }
        if let Some(label) = index.get(url) {
            bookmarks.push(ResolvedBookmark {
                label: label.clone(),
                url: url.to_string(),
            });
        }
    }
    bookmarks
}
