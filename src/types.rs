//! Core types used throughout the project.

use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// A supported locale.
///
/// Only `en` and `fil` exist. Anything else resolves to [`Locale::En`] through
/// [`Locale::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (`en`)
    #[default]
    En,
    /// Filipino (`fil`)
    Fil,
}

/// Returned when a string is not one of the supported locale codes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown locale '{0}' (expected one of: en, fil)")]
pub struct UnknownLocale(pub String);

impl Locale {
    /// Every supported locale, in selector order.
    pub const ALL: [Self; 2] = [Self::En, Self::Fil];

    /// Locale code as stored in the preference store and in `<option value>`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fil => "fil",
        }
    }

    /// Key of the display label used for this locale in the selector.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::En => "english",
            Self::Fil => "filipino",
        }
    }

    /// Resolves an optional, untrusted code to a valid locale.
    ///
    /// Absent and invalid values fall back to the default (`en`).
    #[must_use]
    pub fn resolve(candidate: Option<&str>) -> Self {
        candidate.and_then(|code| code.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "fil" => Ok(Self::Fil),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// How a marked element receives its localized text.
///
/// Chosen by whoever builds the element list, so nothing probes element types
/// while translations are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Input-like element: the text goes into its placeholder.
    TextField,
    /// Anything else: the text replaces its visible content.
    DisplayElement,
}
