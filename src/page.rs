//! Page-ready installation of both behaviors.

use crate::config::PageConfig;
use crate::dom::Document;
use crate::scroll::ScrollWatcher;
use crate::storage::KeyValueStore;
use crate::theme::ThemeToggle;

/// Behaviors installed on one page view. A `None` slot means the page lacks
/// the element that behavior hangs off, and its event is not subscribed.
pub struct PageEnhancements<E, S> {
    pub scroll: Option<ScrollWatcher<E>>,
    pub theme: Option<ThemeToggle<E, S>>,
    /// Toggle control found at install; click listeners attach to this handle.
    /// Set exactly when `theme` is.
    pub theme_control: Option<E>,
}

impl<E, S> PageEnhancements<E, S> {
    pub fn has_scroll(&self) -> bool {
        self.scroll.is_some()
    }

    pub fn has_theme_toggle(&self) -> bool {
        self.theme.is_some()
    }
}

/// Look up the header and toggle control, then build the behaviors.
///
/// The saved theme is restored before this returns, but only when the toggle
/// control exists: without it the store is never read.
pub fn install<D, S>(document: &D, store: S, config: &PageConfig) -> PageEnhancements<D::Element, S>
where
    D: Document,
    S: KeyValueStore,
{
    install_with(document, move || store, config)
}

/// Like `install`, but the store is only opened once a toggle control and a
/// body have been found.
pub fn install_with<D, S, F>(
    document: &D,
    open_store: F,
    config: &PageConfig,
) -> PageEnhancements<D::Element, S>
where
    D: Document,
    S: KeyValueStore,
    F: FnOnce() -> S,
{
    let scroll = match document.query_selector(&config.header_selector) {
        Some(header) => Some(ScrollWatcher::new(header, config)),
        None => {
            tracing::warn!(
                "No element matches {:?}, header scroll effect disabled",
                config.header_selector
            );
            None
        }
    };

    let (theme, theme_control) = match document.element_by_id(&config.toggle_id) {
        Some(control) => match document.body() {
            Some(body) => {
                let toggle = ThemeToggle::new(body, open_store(), config);
                toggle.restore();
                (Some(toggle), Some(control))
            }
            None => {
                tracing::warn!("Document has no body, theme toggle disabled");
                (None, None)
            }
        },
        None => {
            tracing::debug!("No #{} on this page, theme toggle not attached", config.toggle_id);
            (None, None)
        }
    };

    PageEnhancements {
        scroll,
        theme,
        theme_control,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use crate::dom::{ClassList, MemoryDocument, MemoryElement};
    use crate::storage::MemoryStore;

    #[test]
    fn test_full_page() {
        let header = MemoryElement::new();
        let doc = MemoryDocument::new()
            .with_selector(".header", header.clone())
            .with_id("theme-toggle", MemoryElement::new());
        let page = install(&doc, MemoryStore::new(), &PageConfig::default());

        assert!(page.has_scroll());
        assert!(page.has_theme_toggle());
        assert!(page.theme_control.is_some());
    }

    #[test]
    fn test_toggle_control_handle_is_the_looked_up_element() {
        let control = MemoryElement::new();
        let doc = MemoryDocument::new().with_id("theme-toggle", control.clone());
        let page = install(&doc, MemoryStore::new(), &PageConfig::default());

        let handle = page.theme_control.expect("control kept");
        handle.add_class("pressed");
        assert!(control.has_class("pressed"));
    }

    #[test]
    fn test_store_not_opened_without_toggle() {
        let opened = Cell::new(false);
        let doc = MemoryDocument::new().with_selector(".header", MemoryElement::new());
        let page = install_with(
            &doc,
            || {
                opened.set(true);
                MemoryStore::new()
            },
            &PageConfig::default(),
        );

        assert!(!page.has_theme_toggle());
        assert!(page.theme_control.is_none());
        assert!(!opened.get());
    }

    #[test]
    fn test_store_opened_once_with_toggle() {
        let opens = Cell::new(0);
        let doc = MemoryDocument::new().with_id("theme-toggle", MemoryElement::new());
        let page = install_with(
            &doc,
            || {
                opens.set(opens.get() + 1);
                MemoryStore::new()
            },
            &PageConfig::default(),
        );

        assert!(page.has_theme_toggle());
        assert_eq!(opens.get(), 1);
    }

    #[test]
    fn test_missing_header_skips_scroll_only() {
        let doc = MemoryDocument::new().with_id("theme-toggle", MemoryElement::new());
        let page = install(&doc, MemoryStore::new(), &PageConfig::default());

        assert!(!page.has_scroll());
        assert!(page.has_theme_toggle());
    }

    #[test]
    fn test_missing_toggle_never_reads_store() {
        let store = MemoryStore::with_entry("theme", "dark");
        let doc = MemoryDocument::new().with_selector(".header", MemoryElement::new());
        let page = install(&doc, store.clone(), &PageConfig::default());

        assert!(!page.has_theme_toggle());
        assert_eq!(store.reads(), 0);
        let body = doc.body_element().expect("body");
        assert!(!body.has_class("dark-theme"));
    }

    #[test]
    fn test_missing_body_disables_toggle() {
        let doc = MemoryDocument::new()
            .without_body()
            .with_id("theme-toggle", MemoryElement::new());
        let page = install(&doc, MemoryStore::new(), &PageConfig::default());
        assert!(!page.has_theme_toggle());
        assert!(page.theme_control.is_none());
    }

    #[test]
    fn test_install_restores_before_returning() {
        let doc = MemoryDocument::new().with_id("theme-toggle", MemoryElement::new());
        let store = MemoryStore::with_entry("theme", "dark");
        let _page = install(&doc, store.clone(), &PageConfig::default());

        assert_eq!(store.reads(), 1);
        assert!(doc.body_element().expect("body").has_class("dark-theme"));
    }
}
