//! Widget configuration.
//!
//! Everything the two source-of-truth behaviors leave open is configuration
//! here: how many slots exist, how breadcrumb labels are joined, how option
//! keys are named, and what the settings screen says above the selects.
//!
//! ## Configuration options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! max_bookmarks = 10            # Number of bookmark slots
//! label_separator = " -- "      # Joins ancestor titles in labels
//! option_prefix = "bookmark"    # Option keys become bookmark_<n>_url
//! toggle_label = "Bookmarks"    # Text on the dropdown toggle
//!
//! # Text above the selects; omit for a default derived from max_bookmarks
//! settings_hint = "Pick up to ten pages."
//! ```
//!
//! Config files are sparse — override just the values you want. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Widget configuration with sensible defaults.
///
/// User config need only specify the values to override. Unknown keys are
/// rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WidgetConfig {
    /// Number of bookmark slots offered to the admin.
    pub max_bookmarks: usize,
    /// Separator between ancestor titles in breadcrumb labels.
    pub label_separator: String,
    /// Prefix of the per-slot option keys (`<prefix>_<n>_url`).
    pub option_prefix: String,
    /// Text on the dropdown toggle.
    pub toggle_label: String,
    /// Text of the descriptive settings field. `None` derives a default from
    /// `max_bookmarks`.
    pub settings_hint: Option<String>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            max_bookmarks: 10,
            label_separator: " -- ".to_string(),
            option_prefix: "bookmark".to_string(),
            toggle_label: "Bookmarks".to_string(),
            settings_hint: None,
        }
    }
}

impl WidgetConfig {
    /// Parse a TOML document into a validated config.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let config: WidgetConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config values are usable.
    ///
    /// `max_bookmarks` is unsigned so negatives are unrepresentable; zero is
    /// still rejected — a zero-slot widget can never render anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_bookmarks == 0 {
            return Err(ConfigError::Validation(
                "max_bookmarks must be at least 1".into(),
            ));
        }
        if self.option_prefix.trim().is_empty() {
            return Err(ConfigError::Validation(
                "option_prefix must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Option key for a 1-based slot index, e.g. `bookmark_3_url`.
    pub fn slot_key(&self, slot: usize) -> String {
        format!("{}_{}_url", self.option_prefix, slot)
    }

    /// Option keys for every slot, in slot order.
    pub fn slot_keys(&self) -> Vec<String> {
        (1..=self.max_bookmarks).map(|i| self.slot_key(i)).collect()
    }

    /// Text for the descriptive settings field.
    pub fn hint(&self) -> String {
        match &self.settings_hint {
            Some(text) => text.clone(),
            None => format!(
                "Select up to {} pages to bookmark for quick access in the admin area.",
                self.max_bookmarks
            ),
        }
    }
}
