//! Page path and label index construction.
//!
//! Turns a flat snapshot of admin page records into the two derived views the
//! rest of the widget consumes:
//!
//! - **Path**: slash-joined ancestor slugs, root to leaf. `settings/general`
//!   identifies the "General" page nested under "Settings".
//! - **Label**: ancestor titles joined with a configurable separator, root to
//!   leaf. `Settings -- General` is what the admin sees in a select field or
//!   the dropdown.
//!
//! Both are reconstructed by walking `parent` links upward from a page. Slugs
//! are trimmed and empty slugs contribute no path segment; titles are taken
//! as-is. A page whose own slug is empty never appears as an index key — it is
//! not a selectable bookmark target — but its title still shows up in its
//! descendants' labels.
//!
//! The index is rebuilt from a fresh page snapshot on every invocation. There
//! is no cache to invalidate, so host-side edits are always reflected on the
//! next read.
//!
//! ## Malformed parent links
//!
//! A parent id that references no live page terminates the walk (the page
//! behaves as a root). A parent cycle would make the walk non-terminating, so
//! every walk carries a visited set and fails with [`CycleDetected`] on a
//! revisit. [`build_page_index`] downgrades that to a warning and skips the
//! page — one corrupt subtree must not take the whole index down.

use crate::types::{PageId, PageRecord};
use indexmap::IndexMap;
use std::collections::HashSet;
use thiserror::Error;

/// Ancestry walk revisited a page id: the `parent` links contain a cycle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("parent cycle detected at page {0}")]
pub struct CycleDetected(pub PageId);

/// Page records keyed by id, in the host's storage order.
pub type PageMap = IndexMap<PageId, PageRecord>;

/// Page path → display label, in page insertion order.
pub type PathIndex = IndexMap<String, String>;

/// Key a flat list of page rows by id.
///
/// Insertion order is preserved, so the index built from this map lists pages
/// in the same order the host returned them. Duplicate ids keep the last row.
pub fn page_map(rows: Vec<PageRecord>) -> PageMap {
    rows.into_iter().map(|page| (page.id, page)).collect()
}

/// Build the slash-joined slug path for a page, root to leaf.
///
/// Slugs are trimmed; ancestors with an empty slug contribute no segment.
/// An id absent from `pages` yields an empty path.
pub fn build_path(pages: &PageMap, id: PageId) -> Result<String, CycleDetected> {
    let mut segments = Vec::new();
    let mut seen = HashSet::new();
    let mut id = id;
    while id != 0 {
        if !seen.insert(id) {
            return Err(CycleDetected(id));
        }
        let Some(page) = pages.get(&id) else { break };
        let slug = page.slug.trim();
        if !slug.is_empty() {
            segments.push(slug);
        }
        id = page.parent;
    }
    segments.reverse();
    Ok(segments.join("/"))
}

/// Build the breadcrumb label for a page, root to leaf.
///
/// Titles are joined with `separator` and kept as-is — an empty-slug ancestor
/// that is invisible in the path still names itself in the label.
/// An id absent from `pages` yields an empty label.
pub fn build_label(
    pages: &PageMap,
    id: PageId,
    separator: &str,
) -> Result<String, CycleDetected> {
    let mut titles = Vec::new();
    let mut seen = HashSet::new();
    let mut id = id;
    while id != 0 {
        if !seen.insert(id) {
            return Err(CycleDetected(id));
        }
        let Some(page) = pages.get(&id) else { break };
        titles.push(page.title.as_str());
        id = page.parent;
    }
    titles.reverse();
    Ok(titles.join(separator))
}

/// Build the path → label index over every page with a non-empty own slug.
///
/// Entries appear in `pages` iteration order. Two pages sharing a path (same
/// slug under the same parent — possible in malformed data) collapse to one
/// entry, last writer wins. Pages whose ancestry contains a cycle are skipped
/// with a warning rather than failing the whole build.
pub fn build_page_index(pages: &PageMap, separator: &str) -> PathIndex {
    let mut index = PathIndex::new();
    for (&id, page) in pages {
        if page.slug.trim().is_empty() {
            continue;
        }
        match (build_path(pages, id), build_label(pages, id, separator)) {
            (Ok(path), Ok(label)) => {
                index.insert(path, label);
            }
            _ => {
                log::warn!("skipping page {id}: parent cycle in ancestry");
            }
        }
    }
    index
}
