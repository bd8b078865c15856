//! JSON page model implementing [`Document`]

use std::collections::BTreeMap;
use std::path::Path;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use super::{
    Document,
    ElementHandle,
    MarkedElement,
    SelectorHandle,
    SelectorOption,
};
use crate::types::{
    ElementKind,
    Locale,
};

/// Errors raised while loading or saving a page file
#[derive(Error, Debug)]
pub enum PageError {
    #[error("Failed to access page file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse page: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// A flat list of page elements.
///
/// ```json
/// {
///   "elements": [
///     { "tag": "h1", "attributes": { "data-i18n": "welcome" }, "text": "Welcome" },
///     { "tag": "input", "attributes": { "data-i18n": "enter_username" } },
///     { "tag": "select", "id": "languageSelector" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDocument {
    /// Elements in document order
    #[serde(default)]
    pub elements: Vec<PageElement>,
}

/// One element of a [`PageDocument`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageElement {
    /// Element id, used for selector lookup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Tag name; `input` marks a text field
    pub tag: String,

    /// Free-form attributes, including the translation marker
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,

    /// Displayed text
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,

    /// Placeholder shown in an empty text field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Only meaningful for selectors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<PageOption>,

    /// Selected option value. Only meaningful for selectors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A selector option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageOption {
    /// Submitted value (a locale code)
    pub value: String,
    /// Visible label
    pub label: String,
}

impl PageElement {
    /// Creates an element with the given tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), ..Self::default() }
    }

    /// Sets the element id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adds an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Sets the displayed text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the placeholder.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// `input` elements take placeholders; everything else takes text.
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        if self.tag.eq_ignore_ascii_case("input") {
            ElementKind::TextField
        } else {
            ElementKind::DisplayElement
        }
    }
}

impl PageDocument {
    /// Creates an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element and returns its handle.
    pub fn push(&mut self, element: PageElement) -> ElementHandle {
        self.elements.push(element);
        ElementHandle(self.elements.len() - 1)
    }

    /// Element behind a handle.
    #[must_use]
    pub fn element(&self, handle: ElementHandle) -> Option<&PageElement> {
        self.elements.get(handle.0)
    }

    /// First element with the given id.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&PageElement> {
        self.elements.iter().find(|element| element.id.as_deref() == Some(id))
    }

    /// # Errors
    /// - JSON parse error
    pub fn from_json(json_text: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(json_text)?)
    }

    /// # Errors
    /// - JSON serialization error
    pub fn to_json_pretty(&self) -> Result<String, PageError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// # Errors
    /// - File read error
    /// - JSON parse error
    pub fn load(path: &Path) -> Result<Self, PageError> {
        tracing::debug!("Loading page from: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// # Errors
    /// - JSON serialization error
    /// - File write error
    pub fn save(&self, path: &Path) -> Result<(), PageError> {
        std::fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }

    /// Mutable access by handle. Stale handles are ignored by the callers.
    fn element_mut(&mut self, handle: ElementHandle) -> Option<&mut PageElement> {
        self.elements.get_mut(handle.0)
    }
}

impl Document for PageDocument {
    fn marked_elements(&self, marker_attribute: &str) -> Vec<MarkedElement> {
        self.elements
            .iter()
            .enumerate()
            .filter_map(|(index, element)| {
                let key = element.attributes.get(marker_attribute)?;
                Some(MarkedElement {
                    handle: ElementHandle(index),
                    key: key.clone(),
                    kind: element.kind(),
                })
            })
            .collect()
    }

    fn set_text(&mut self, element: ElementHandle, text: &str) {
        if let Some(element) = self.element_mut(element) {
            element.text = text.to_string();
        }
    }

    fn set_placeholder(&mut self, element: ElementHandle, text: &str) {
        if let Some(element) = self.element_mut(element) {
            element.placeholder = Some(text.to_string());
        }
    }

    fn find_selector(&self, id: &str) -> Option<SelectorHandle> {
        self.elements
            .iter()
            .position(|element| element.id.as_deref() == Some(id))
            .map(SelectorHandle)
    }

    fn set_selector_options(&mut self, selector: SelectorHandle, options: &[SelectorOption]) {
        if let Some(element) = self.element_mut(ElementHandle(selector.0)) {
            element.options = options
                .iter()
                .map(|option| PageOption {
                    value: option.value.code().to_string(),
                    label: option.label.clone(),
                })
                .collect();
        }
    }

    fn set_selector_value(&mut self, selector: SelectorHandle, value: Locale) {
        if let Some(element) = self.element_mut(ElementHandle(selector.0)) {
            element.value = Some(value.code().to_string());
        }
    }
}
