//! Select-field descriptors for the host's settings UI.
//!
//! The widget does not own a settings screen. Instead it hands the host a
//! declarative list of [`FieldSpec`]s describing what to render: one
//! descriptive note followed by one select per bookmark slot, each offering
//! every known page path as a choice. The host renders the fields, persists
//! whatever the admin picks, and later hands the stored values back through
//! [`SettingsStore`](crate::host::SettingsStore).
//!
//! Everything here is pure data — no I/O, no side effects. `FieldSpec`
//! serializes to tagged JSON so settings UIs outside Rust can consume it:
//!
//! ```json
//! { "type": "select", "key": "bookmark_1_url", "label": "Bookmark 1",
//!   "choices": [ { "value": "", "label": "-- Select a Page --" },
//!                { "value": "settings/general", "label": "Settings -- General" } ] }
//! ```

use crate::config::WidgetConfig;
use crate::index::PathIndex;
use serde::Serialize;

/// Placeholder choice label for an unassigned slot.
pub const PLACEHOLDER_LABEL: &str = "-- Select a Page --";

/// One field of the widget's settings form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldSpec {
    /// Descriptive text shown above the selects. Produces no stored value.
    Note {
        text: String,
    },
    /// One bookmark slot: a select offering every known page path.
    Select {
        /// Option key the host persists this slot under (e.g. `bookmark_3_url`).
        key: String,
        /// Display label (e.g. "Bookmark 3").
        label: String,
        /// Placeholder first, then every (path, label) pair in index order.
        choices: Vec<Choice>,
    },
}

/// One selectable option of a [`FieldSpec::Select`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    /// Stored value — a page path, or empty for the placeholder.
    pub value: String,
    /// Display text.
    pub label: String,
}

/// Describe the settings fields for `config.max_bookmarks` slots.
///
/// Selects are keyed by 1-based slot index via [`WidgetConfig::slot_key`] and
/// list choices in the index's iteration order, placeholder first.
pub fn describe_options(index: &PathIndex, config: &WidgetConfig) -> Vec<FieldSpec> {
    let mut fields = Vec::with_capacity(config.max_bookmarks + 1);
    fields.push(FieldSpec::Note {
        text: config.hint(),
    });
    for slot in 1..=config.max_bookmarks {
        let mut choices = Vec::with_capacity(index.len() + 1);
        choices.push(Choice {
            value: String::new(),
            label: PLACEHOLDER_LABEL.to_string(),
        });
        choices.extend(index.iter().map(|(path, label)| Choice {
            value: path.clone(),
            label: label.clone(),
        }));
        fields.push(FieldSpec::Select {
            key: config.slot_key(slot),
            label: format!("Bookmark {slot}"),
            choices,
        });
    }
    fields
}
