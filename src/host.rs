//! Collaborator interfaces to the host admin framework.
//!
//! The widget never reaches into the host through globals. Everything it needs
//! — page records, persisted settings, URL construction — comes in through
//! these three traits, injected at [`BookmarksWidget`](crate::widget::BookmarksWidget)
//! construction. A host adapter implements them against its own storage; tests
//! implement them in memory.
//!
//! All three are read-only from the widget's point of view. The widget never
//! creates, mutates, or deletes host data.

use crate::types::PageRecord;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostError {
    #[error("page store unavailable: {0}")]
    PageStoreUnavailable(String),
}

/// Read access to the host's admin content pages.
pub trait PageStore {
    /// A fresh snapshot of all pages with a live/published status.
    ///
    /// Ordering is the host's storage order; the widget preserves it when
    /// listing selectable pages. Any read failure surfaces as
    /// [`HostError::PageStoreUnavailable`].
    fn list_live_pages(&self) -> Result<Vec<PageRecord>, HostError>;
}

/// Read access to the widget's persisted settings.
pub trait SettingsStore {
    /// Stored values for the given option keys, one per key, order preserved.
    ///
    /// Keys follow the configured option-key scheme (`bookmark_1_url`, ...).
    /// A key with no persisted value maps to `None`. A store returning fewer
    /// values than keys is treated as having trailing empty slots.
    fn slot_values(&self, keys: &[String]) -> Vec<Option<String>>;
}

/// Turns a stored page path into an absolute admin URL for rendering.
pub trait UrlBuilder {
    fn build(&self, path: &str) -> String;
}
