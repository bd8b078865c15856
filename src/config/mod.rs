//! Settings naming the preference key, selector id and marker attribute
/// Configuration manager
mod manager;
/// Configuration types and settings
mod types;

pub use manager::ConfigManager;
pub use types::{
    ConfigError,
    DEFAULT_SELECTOR_ID,
    DEFAULT_STORAGE_KEY,
    LocaleSettings,
    ValidationError,
};
