//! Shared types used across the widget pipeline.
//!
//! These types cross the boundary to the host framework (page records come in
//! through [`PageStore`](crate::host::PageStore), resolved bookmarks go out to
//! the renderer) and derive serde so the host side can persist or inspect them.

use serde::{Deserialize, Serialize};

/// Identifier of an admin page record. `0` never identifies a page; it is the
/// "no parent" sentinel in [`PageRecord::parent`].
pub type PageId = u64;

/// One admin content page as the host stores it.
///
/// Pages form a forest via `parent`. Both `slug` and `title` may be empty —
/// malformed records are tolerated, never rejected (an empty slug just makes
/// the page unselectable as a bookmark target).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRecord {
    /// Unique page id (> 0).
    pub id: PageId,
    /// Human-readable page title, used for breadcrumb labels.
    pub title: String,
    /// URL slug. Empty means the page contributes no path segment.
    pub slug: String,
    /// Parent page id, or `0` for a root-level page.
    pub parent: PageId,
}

/// A bookmark slot whose stored path matched a live page.
///
/// `url` is the stored path as-is; turning it into an absolute admin URL is
/// the [`UrlBuilder`](crate::host::UrlBuilder)'s job at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedBookmark {
    /// Display label: the breadcrumb built from ancestor titles.
    pub label: String,
    /// The stored page path.
    pub url: String,
}
