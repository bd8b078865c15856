//! Document abstraction
//!
//! The controller only talks to the page through [`Document`]. Element handles are
//! opaque indices handed out by the implementation.

/// In-memory JSON page
mod page;

pub use page::{
    PageDocument,
    PageElement,
    PageError,
    PageOption,
};

use crate::types::{
    ElementKind,
    Locale,
};

/// Default marker attribute carrying a translation key.
pub const DEFAULT_MARKER_ATTRIBUTE: &str = "data-i18n";

/// Opaque reference to an element of a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementHandle(pub usize);

/// Opaque reference to a selector element of a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectorHandle(pub usize);

/// An element carrying the marker attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedElement {
    pub handle: ElementHandle,
    /// Translation key read from the marker attribute
    pub key: String,
    pub kind: ElementKind,
}

/// One entry of the language selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOption {
    pub value: Locale,
    pub label: String,
}

/// Mutation interface over a live page.
pub trait Document {
    /// Every element carrying `marker_attribute`, in document order.
    fn marked_elements(&self, marker_attribute: &str) -> Vec<MarkedElement>;

    /// Replaces the visible text of an element.
    fn set_text(&mut self, element: ElementHandle, text: &str);

    /// Replaces the placeholder of an input-like element.
    fn set_placeholder(&mut self, element: ElementHandle, text: &str);

    /// Finds the selector element with the given id.
    fn find_selector(&self, id: &str) -> Option<SelectorHandle>;

    /// Replaces all options of a selector.
    fn set_selector_options(&mut self, selector: SelectorHandle, options: &[SelectorOption]);

    /// Sets the currently selected value of a selector.
    fn set_selector_value(&mut self, selector: SelectorHandle, value: Locale);
}
