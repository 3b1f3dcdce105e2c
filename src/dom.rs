//! Presentation-marker capability over page elements.
//!
//! The behaviors only ever look elements up and flip classes on them, so the
//! DOM is reduced to two small traits. The browser implementation lives in
//! `web`; the in-memory one here backs headless hosts and tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Class-list access on a single element.
///
/// Methods take `&self`: element handles are shared references to a node
/// owned by the page.
pub trait ClassList {
    fn has_class(&self, class: &str) -> bool;

    fn add_class(&self, class: &str);

    fn remove_class(&self, class: &str);

    /// Flip `class` and return whether it is present afterwards.
    fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }
}

/// Element lookups performed once at page-ready. `None` means the element
/// does not exist on this page.
pub trait Document {
    type Element: ClassList;

    fn query_selector(&self, selector: &str) -> Option<Self::Element>;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    fn body(&self) -> Option<Self::Element>;
}

#[derive(Debug, Default)]
struct NodeState {
    classes: RefCell<Vec<String>>,
    writes: Cell<usize>,
}

/// Detached element with a class list. Clones alias the same node.
#[derive(Debug, Clone, Default)]
pub struct MemoryElement {
    node: Rc<NodeState>,
}

impl MemoryElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classes(classes: &[&str]) -> Self {
        let element = Self::new();
        for class in classes {
            element.add_class(class);
        }
        element.node.writes.set(0);
        element
    }

    /// Classes in insertion order, like `DOMTokenList`.
    pub fn classes(&self) -> Vec<String> {
        self.node.classes.borrow().clone()
    }

    /// Number of add/remove calls that reached this node.
    pub fn writes(&self) -> usize {
        self.node.writes.get()
    }
}

impl ClassList for MemoryElement {
    fn has_class(&self, class: &str) -> bool {
        self.node.classes.borrow().iter().any(|c| c == class)
    }

    fn add_class(&self, class: &str) {
        self.node.writes.set(self.node.writes.get() + 1);
        let mut classes = self.node.classes.borrow_mut();
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.node.writes.set(self.node.writes.get() + 1);
        self.node.classes.borrow_mut().retain(|c| c != class);
    }
}

/// Page made of registered elements.
///
/// Selectors are matched verbatim; there is no CSS engine behind
/// `query_selector`.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    by_selector: HashMap<String, MemoryElement>,
    by_id: HashMap<String, MemoryElement>,
    body: Option<MemoryElement>,
}

impl MemoryDocument {
    /// Empty page with a body and nothing else.
    pub fn new() -> Self {
        Self {
            body: Some(MemoryElement::new()),
            ..Self::default()
        }
    }

    pub fn with_selector(mut self, selector: &str, element: MemoryElement) -> Self {
        self.by_selector.insert(selector.to_string(), element);
        self
    }

    pub fn with_id(mut self, id: &str, element: MemoryElement) -> Self {
        self.by_id.insert(id.to_string(), element);
        self
    }

    pub fn without_body(mut self) -> Self {
        self.body = None;
        self
    }

    pub fn body_element(&self) -> Option<&MemoryElement> {
        self.body.as_ref()
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn query_selector(&self, selector: &str) -> Option<MemoryElement> {
        self.by_selector.get(selector).cloned()
    }

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.by_id.get(id).cloned()
    }

    fn body(&self) -> Option<MemoryElement> {
        self.body.clone()
    }
}
