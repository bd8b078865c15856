use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::document::DEFAULT_MARKER_ATTRIBUTE;

/// Default preference key holding the locale code.
pub const DEFAULT_STORAGE_KEY: &str = "language";

/// Default id of the language selector element.
pub const DEFAULT_SELECTOR_ID: &str = "languageSelector";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "markerAttribute")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Names under which the page and the preference store are addressed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocaleSettings {
    /// Preference key holding the locale code.
    pub storage_key: String,

    /// Id of the language selector element.
    pub selector_id: String,

    /// Attribute carrying the translation key (must be a `data-*` attribute).
    pub marker_attribute: String,
}

impl LocaleSettings {
    /// # Errors
    /// - Required field is empty
    /// - Marker attribute is not a `data-*` attribute
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.storage_key.is_empty() {
            errors.push(ValidationError::new(
                "storageKey",
                "The key cannot be empty. Please specify a key, for example: \"language\"",
            ));
        }

        if self.selector_id.is_empty() {
            errors.push(ValidationError::new(
                "selectorId",
                "The id cannot be empty. Please specify an element id, for example: \"languageSelector\"",
            ));
        }

        match self.marker_attribute.strip_prefix("data-") {
            Some(name) if !name.is_empty() => {}
            _ => errors.push(ValidationError::new(
                "markerAttribute",
                format!(
                    "Invalid marker attribute '{}': must be a data attribute such as \"data-i18n\"",
                    self.marker_attribute
                ),
            )),
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            selector_id: DEFAULT_SELECTOR_ID.to_string(),
            marker_attribute: DEFAULT_MARKER_ATTRIBUTE.to_string(),
        }
    }
}
