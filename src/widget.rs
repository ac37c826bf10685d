//! The host-facing widget interface.
//!
//! [`BookmarksWidget`] is the one type a host framework touches. It is a plain
//! struct with two operations — [`options`](BookmarksWidget::options) at
//! configuration time and [`render`](BookmarksWidget::render) at display time
//! — no base class, no registration protocol. The host collaborators are
//! injected at construction and the config is validated once, up front.
//!
//! Every operation starts from a fresh page snapshot and recomputes the path
//! index. Nothing is cached between calls, so concurrent host-side edits are
//! always reflected on the next read.

use crate::config::{ConfigError, WidgetConfig};
use crate::host::{HostError, PageStore, SettingsStore, UrlBuilder};
use crate::index::{self, PathIndex};
use crate::options::{self, FieldSpec};
use crate::render;
use crate::resolve;
use maud::{Markup, html};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("host error: {0}")]
    Host(#[from] HostError),
}

/// The admin bookmarks widget, generic over its host collaborators.
pub struct BookmarksWidget<P, S, U> {
    config: WidgetConfig,
    pages: P,
    settings: S,
    urls: U,
}

impl<P, S, U> BookmarksWidget<P, S, U>
where
    P: PageStore,
    S: SettingsStore,
    U: UrlBuilder,
{
    /// Build a widget from a validated config and host collaborators.
    pub fn new(
        config: WidgetConfig,
        pages: P,
        settings: S,
        urls: U,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            pages,
            settings,
            urls,
        })
    }

    /// Field descriptors for the host's settings UI.
    ///
    /// One descriptive note plus one select per slot, offering every currently
    /// selectable page. Page store failure propagates.
    pub fn options(&self) -> Result<Vec<FieldSpec>, WidgetError> {
        let index = self.path_index()?;
        Ok(options::describe_options(&index, &self.config))
    }

    /// The dropdown markup for the currently persisted selections.
    ///
    /// Empty markup when no slot resolves to a live page. Page store failure
    /// propagates; callers that must never break the admin page should use
    /// [`render_or_empty`](Self::render_or_empty).
    pub fn render(&self) -> Result<Markup, WidgetError> {
        let index = self.path_index()?;
        let keys = self.config.slot_keys();
        let mut values = self.settings.slot_values(&keys);
        // An over-returning store must not grow the menu past the slot count.
        values.truncate(keys.len());
        let bookmarks = resolve::resolve(&values, &index);
        Ok(render::render_dropdown(
            &bookmarks,
            &self.urls,
            &self.config.toggle_label,
        ))
    }

    /// Like [`render`](Self::render), but fails open: a page store failure is
    /// logged and the widget simply does not appear.
    pub fn render_or_empty(&self) -> Markup {
        match self.render() {
            Ok(markup) => markup,
            Err(err) => {
                log::warn!("admin bookmarks hidden: {err}");
                html! {}
            }
        }
    }

    fn path_index(&self) -> Result<PathIndex, WidgetError> {
        let rows = self.pages.list_live_pages()?;
        let pages = index::page_map(rows);
        Ok(index::build_page_index(&pages, &self.config.label_separator))
    }
}
