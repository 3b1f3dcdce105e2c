//! Page configuration
//!
//! Every field has a default matching the stock UIKit markup, so an empty
//! object (or no config at all) wires the behaviors to `.header`,
//! `#theme-toggle` and the `theme` storage key.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PageConfig {
    /// Selector for the header element that receives the scrolled marker
    #[serde(default = "default_header_selector")]
    pub header_selector: String,

    /// Element id of the theme toggle control
    #[serde(default = "default_toggle_id")]
    pub toggle_id: String,

    #[serde(default = "default_scrolled_class")]
    pub scrolled_class: String,

    /// Class applied to the document body while the dark theme is active
    #[serde(default = "default_dark_class")]
    pub dark_class: String,

    /// Storage key holding "light" or "dark"
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Pixels to scroll before the header marker is applied
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold: f64,
}

fn default_header_selector() -> String {
    ".header".into()
}

fn default_toggle_id() -> String {
    "theme-toggle".into()
}

fn default_scrolled_class() -> String {
    "scrolled".into()
}

fn default_dark_class() -> String {
    "dark-theme".into()
}

fn default_storage_key() -> String {
    "theme".into()
}

fn default_scroll_threshold() -> f64 {
    50.0
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            header_selector: default_header_selector(),
            toggle_id: default_toggle_id(),
            scrolled_class: default_scrolled_class(),
            dark_class: default_dark_class(),
            storage_key: default_storage_key(),
            scroll_threshold: default_scroll_threshold(),
        }
    }
}

impl PageConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let names = [
            ("header_selector", &self.header_selector),
            ("toggle_id", &self.toggle_id),
            ("scrolled_class", &self.scrolled_class),
            ("dark_class", &self.dark_class),
            ("storage_key", &self.storage_key),
        ];
        for (field, value) in names {
            if value.trim().is_empty() {
                return Err(Error::InvalidConfig(format!("{} must not be empty", field)));
            }
        }

        // Class names go through DOMTokenList, which throws on whitespace
        for (field, value) in [
            ("scrolled_class", &self.scrolled_class),
            ("dark_class", &self.dark_class),
        ] {
            if value.chars().any(char::is_whitespace) {
                return Err(Error::InvalidConfig(format!(
                    "{} must be a single class name, got {:?}",
                    field, value
                )));
            }
        }

        if !self.scroll_threshold.is_finite() || self.scroll_threshold < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "scroll_threshold must be a non-negative number, got {}",
                self.scroll_threshold
            )));
        }

        Ok(())
    }
}
