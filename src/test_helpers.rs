//! Shared test utilities for the admin-bookmarks test suite.
//!
//! Provides page-forest fixture builders and in-memory implementations of the
//! host collaborator traits, so every module can exercise the full flow
//! without a real CMS behind it.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let pages = forest(&[
//!     page(1, "Settings", "settings", 0),
//!     page(2, "General", "general", 1),
//! ]);
//! let index = build_page_index(&pages, " -- ");
//! assert_eq!(index.get("settings/general").unwrap(), "Settings -- General");
//! ```

use std::collections::HashMap;

use crate::host::{HostError, PageStore, SettingsStore, UrlBuilder};
use crate::index::{PageMap, PathIndex, build_page_index, page_map};
use crate::types::{PageId, PageRecord};

// =========================================================================
// Fixture builders
// =========================================================================

/// Build one page record.
pub fn page(id: PageId, title: &str, slug: &str, parent: PageId) -> PageRecord {
    PageRecord {
        id,
        title: title.to_string(),
        slug: slug.to_string(),
        parent,
    }
}

/// Key a slice of page records by id, preserving order.
pub fn forest(pages: &[PageRecord]) -> PageMap {
    page_map(pages.to_vec())
}

/// The standard fixture forest used across module tests:
///
/// ```text
/// Settings (settings)
/// └── General (general)          → path "settings/general"
/// Hidden (no slug)               → not selectable
/// └── Child (child)              → path "child", label "Hidden -- Child"
/// ```
pub fn settings_pages() -> Vec<PageRecord> {
    vec![
        page(1, "Settings", "settings", 0),
        page(2, "General", "general", 1),
        page(3, "Hidden", "", 0),
        page(4, "Child", "child", 3),
    ]
}

/// Path index over [`settings_pages`] with the default `" -- "` separator.
pub fn settings_index() -> PathIndex {
    build_page_index(&forest(&settings_pages()), " -- ")
}

/// Slot values from literals. Empty strings model unassigned slots.
pub fn slots(values: &[&str]) -> Vec<Option<String>> {
    values.iter().map(|v| Some(v.to_string())).collect()
}

// =========================================================================
// In-memory host collaborators
// =========================================================================

/// Page store over a fixed in-memory row set.
pub struct MemoryPages {
    rows: Vec<PageRecord>,
}

impl MemoryPages {
    pub fn new(rows: Vec<PageRecord>) -> Self {
        Self { rows }
    }
}

impl PageStore for MemoryPages {
    fn list_live_pages(&self) -> Result<Vec<PageRecord>, HostError> {
        Ok(self.rows.clone())
    }
}

/// Page store that always fails, for the fail-open paths.
pub struct FailingPages;

impl PageStore for FailingPages {
    fn list_live_pages(&self) -> Result<Vec<PageRecord>, HostError> {
        Err(HostError::PageStoreUnavailable(
            "content database offline".to_string(),
        ))
    }
}

/// Settings store over a fixed key → value map.
pub struct MemorySettings {
    values: HashMap<String, String>,
}

impl MemorySettings {
    pub fn new(stored: &[(&str, &str)]) -> Self {
        Self {
            values: stored
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl SettingsStore for MemorySettings {
    fn slot_values(&self, keys: &[String]) -> Vec<Option<String>> {
        keys.iter().map(|k| self.values.get(k).cloned()).collect()
    }
}

/// URL builder that prefixes paths with a fixed admin base.
pub struct AdminUrls {
    base: String,
}

impl AdminUrls {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.to_string(),
        }
    }
}

impl UrlBuilder for AdminUrls {
    fn build(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}
