//! Header scroll marker.

use crate::config::PageConfig;
use crate::dom::ClassList;

pub const DEFAULT_SCROLL_THRESHOLD: f64 = 50.0;

/// Scroll state is derived on every event and never stored.
///
/// NaN compares false, so an unreadable offset counts as "not scrolled".
pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Keeps the scrolled marker on the header in sync with the scroll offset.
pub struct ScrollWatcher<E> {
    header: E,
    class: String,
    threshold: f64,
}

impl<E: ClassList> ScrollWatcher<E> {
    pub fn new(header: E, config: &PageConfig) -> Self {
        Self {
            header,
            class: config.scrolled_class.clone(),
            threshold: config.scroll_threshold,
        }
    }

    /// Apply the marker for `offset` and return whether the header is now
    /// marked. The element is only written when its state changes.
    pub fn on_scroll(&self, offset: f64) -> bool {
        let scrolled = is_scrolled(offset, self.threshold);
        let marked = self.header.has_class(&self.class);
        if scrolled && !marked {
            tracing::trace!(offset, "header scrolled past threshold");
            self.header.add_class(&self.class);
        } else if !scrolled && marked {
            tracing::trace!(offset, "header back above threshold");
            self.header.remove_class(&self.class);
        }
        scrolled
    }
}
