//! Translation store: locale → key → localized text

use std::collections::{
    BTreeSet,
    HashMap,
};
use std::sync::LazyLock;

use serde_json::Value;
use thiserror::Error;

use super::builtin;
use crate::types::{
    Locale,
    UnknownLocale,
};

/// Key separator used when flattening nested dictionaries.
pub const KEY_SEPARATOR: &str = ".";

/// Process-wide built-in dictionary.
static BUILTIN: LazyLock<TranslationStore> = LazyLock::new(|| {
    TranslationStore::from_tables([(Locale::En, builtin::EN), (Locale::Fil, builtin::FIL)])
});

/// Errors raised while building a store from a JSON dictionary.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to parse translation dictionary: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Translation dictionary must be an object keyed by locale code")]
    NotAnObject,

    #[error("Translations for locale '{0}' must be an object")]
    LocaleNotAnObject(Locale),

    #[error(transparent)]
    UnknownLocale(#[from] UnknownLocale),
}

/// Immutable mapping of locale to translation entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationStore {
    /// Flattened key map per locale
    tables: HashMap<Locale, HashMap<String, String>>,
}

impl TranslationStore {
    /// The built-in FurniCraft dictionary, shared by the whole process.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Builds a store from `(key, text)` tables.
    ///
    /// A locale listed twice keeps the entries of both tables; later entries win.
    /// Empty texts are dropped.
    #[must_use]
    pub fn from_tables<'a, I, E>(tables: I) -> Self
    where
        I: IntoIterator<Item = (Locale, E)>,
        E: IntoIterator<Item = &'a (&'a str, &'a str)>,
    {
        let mut store = Self::default();
        for (locale, entries) in tables {
            let table = store.tables.entry(locale).or_default();
            for (key, text) in entries {
                if !text.is_empty() {
                    table.insert((*key).to_string(), (*text).to_string());
                }
            }
        }
        store
    }

    /// Builds a store from a JSON dictionary such as
    /// `{"en": {"welcome": "Welcome"}, "fil": {"welcome": "Maligayang pagdating"}}`.
    ///
    /// Nested objects are flattened with [`KEY_SEPARATOR`]. Only non-empty string
    /// leaves become entries; `null`, booleans, numbers and `""` leave the key
    /// undefined.
    ///
    /// # Errors
    /// - JSON parse failure
    /// - Root or a locale entry is not an object
    /// - A top-level key is not a supported locale code
    pub fn from_json(json_text: &str) -> Result<Self, StoreError> {
        let json: Value = serde_json::from_str(json_text)?;
        let Value::Object(locales) = json else {
            return Err(StoreError::NotAnObject);
        };

        let mut store = Self::default();
        for (code, entries) in &locales {
            let locale: Locale = code.parse()?;
            if !entries.is_object() {
                return Err(StoreError::LocaleNotAnObject(locale));
            }
            let keys = flatten_json(entries, KEY_SEPARATOR, None);
            tracing::debug!("Loaded {} translation keys for '{}'", keys.len(), locale);
            store.tables.entry(locale).or_default().extend(keys);
        }

        Ok(store)
    }

    /// Looks up the localized text for `key`.
    ///
    /// `None` means the caller leaves its current text alone; there is no
    /// fallback to another locale.
    #[must_use]
    pub fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        self.tables.get(&locale)?.get(key).map(String::as_str)
    }

    /// Keys defined for `locale`, in no particular order.
    pub fn keys(&self, locale: Locale) -> impl Iterator<Item = &str> {
        self.tables.get(&locale).into_iter().flat_map(|table| table.keys().map(String::as_str))
    }

    /// Keys that some other locale defines but `locale` does not, sorted.
    #[must_use]
    pub fn missing_keys(&self, locale: Locale) -> Vec<&str> {
        let missing: BTreeSet<&str> = self
            .tables
            .iter()
            .filter(|(other, _)| **other != locale)
            .flat_map(|(_, table)| table.keys().map(String::as_str))
            .filter(|key| self.lookup(locale, key).is_none())
            .collect();
        missing.into_iter().collect()
    }
}

/// Flatten nested JSON object into a separator-joined key map.
///
/// Only non-empty string leaves are kept.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use page_i18n::translation::flatten_json;
///
/// let json = json!({
///     "login": {
///         "title": "Login",
///         "submit": "Send"
///     }
/// });
///
/// let flattened = flatten_json(&json, ".", None);
/// assert_eq!(flattened.get("login.title"), Some(&"Login".to_string()));
/// assert_eq!(flattened.get("login.submit"), Some(&"Send".to_string()));
/// ```
#[must_use]
pub fn flatten_json(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
) -> HashMap<String, String> {
    let mut result = HashMap::new();
    flatten_json_value(json, separator, prefix, &mut result);
    result
}

/// Recursive worker for [`flatten_json`].
fn flatten_json_value(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
    result: &mut HashMap<String, String>,
) {
    match json {
        Value::Object(map) => {
            for (key, value) in map {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::Array(arr) => {
            for (index, value) in arr.iter().enumerate() {
                let full_key =
                    prefix.map_or_else(|| format!("[{index}]"), |p| format!("{p}[{index}]"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::String(s) if !s.is_empty() => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), s.clone());
            }
        }
        _ => {
            tracing::trace!("Skipping non-text translation value at {:?}: {}", prefix, json);
        }
    }
}
