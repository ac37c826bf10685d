//! # Admin Bookmarks
//!
//! A dropdown widget for CMS admin headers: the site administrator picks up
//! to ten previously configured admin pages, and the widget renders them as a
//! quick-access menu. The host framework owns the pages and the persisted
//! selections; this crate turns one into select-field descriptors and the
//! other into markup.
//!
//! # Architecture: One-Way Data Flow
//!
//! ```text
//! PageStore rows → path/label index → options descriptor   (settings screen)
//!                                   → bookmark resolution → dropdown markup
//! ```
//!
//! The index is rebuilt from a fresh page snapshot on every call — no cache,
//! no shared state between invocations, so host-side edits always show up on
//! the next read and concurrent requests never contend.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`index`] | Walks parent links to build the path/label index from flat page rows |
//! | [`options`] | Declarative select-field descriptors for the host's settings UI |
//! | [`resolve`] | Matches persisted slot values against the live index, slot order preserved |
//! | [`render`] | Dropdown markup: style block, toggle, link list, behavior script |
//! | [`widget`] | [`BookmarksWidget`](widget::BookmarksWidget) — the `options()`/`render()` surface the host calls |
//! | [`host`] | Collaborator traits: `PageStore`, `SettingsStore`, `UrlBuilder` |
//! | [`config`] | `WidgetConfig`: slot count, label separator, option key scheme |
//! | [`types`] | Shared types (`PageRecord`, `ResolvedBookmark`) |
//!
//! # Design Decisions
//!
//! ## Injected Collaborators, No Globals
//!
//! The widget reaches the host only through three traits, passed in at
//! construction. There is no ambient framework context and no base class to
//! inherit from — a host adapter implements three small traits and calls two
//! methods. Tests swap in in-memory implementations.
//!
//! ## Maud Over Template Engines
//!
//! Markup is generated with [Maud](https://maud.lambda.xyz/): templates are
//! compile-time-checked Rust code, interpolation is auto-escaped (a page
//! title cannot inject markup into the admin header), and there are no
//! runtime template files to ship. The dropdown's CSS and JS are embedded
//! with `include_str!`, so the fragment is fully self-contained.
//!
//! ## Stale Bookmarks Disappear, Failures Fail Open
//!
//! A stored path whose page was renamed or unpublished simply stops
//! resolving — no error, the entry just leaves the menu. A page store outage
//! is an error to the caller, but
//! [`render_or_empty`](widget::BookmarksWidget::render_or_empty) downgrades
//! it to a warning and renders nothing: a broken bookmarks menu must never
//! take the admin page down with it.
//!
//! ## Cycle Guard on Ancestry Walks
//!
//! Parent links are host data and can be corrupt. Every ancestry walk
//! carries a visited set and fails fast with
//! [`CycleDetected`](index::CycleDetected) instead of looping forever; the
//! index build skips the affected page and keeps the rest.

pub mod config;
pub mod host;
pub mod index;
pub mod options;
pub mod render;
pub mod resolve;
pub mod types;
pub mod widget;

#[cfg(test)]
pub(crate) mod test_helpers;
