//! Light/dark theme toggle with persistence.
//!
//! The body's dark marker is the source of truth; the stored value is
//! written from it after every toggle and read back once at page-ready.

use serde::{Deserialize, Serialize};

use crate::config::PageConfig;
use crate::dom::ClassList;
use crate::storage::KeyValueStore;

/// Theme options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Only an exact "dark" selects the dark theme.
    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    fn from_marker(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Flips the dark marker on the body and persists the result.
pub struct ThemeToggle<E, S> {
    body: E,
    store: S,
    key: String,
    dark_class: String,
}

impl<E: ClassList, S: KeyValueStore> ThemeToggle<E, S> {
    pub fn new(body: E, store: S, config: &PageConfig) -> Self {
        Self {
            body,
            store,
            key: config.storage_key.clone(),
            dark_class: config.dark_class.clone(),
        }
    }

    /// Theme as currently shown on the page.
    pub fn current(&self) -> Theme {
        Theme::from_marker(self.body.has_class(&self.dark_class))
    }

    /// Load the saved preference and apply it. Only a stored "dark" changes
    /// the page; anything else keeps the default light presentation.
    /// Returns the theme the page shows afterwards.
    pub fn restore(&self) -> Theme {
        let saved = match self.store.get(&self.key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to read saved theme: {}", e);
                None
            }
        };
        let saved = saved.as_deref().map(Theme::parse).unwrap_or_default();
        if saved == Theme::Dark {
            self.body.add_class(&self.dark_class);
        }
        let shown = self.current();
        tracing::debug!("Restored theme: saved {}, shown {}", saved.as_str(), shown.as_str());
        shown
    }

    /// Handle a click on the toggle control. Returns the new theme.
    pub fn toggle(&self) -> Theme {
        let theme = Theme::from_marker(self.body.toggle_class(&self.dark_class));
        if let Err(e) = self.store.set(&self.key, theme.as_str()) {
            tracing::warn!("Failed to save theme preference: {}", e);
        }
        tracing::debug!("Theme toggled to {}", theme.as_str());
        theme
    }
}
