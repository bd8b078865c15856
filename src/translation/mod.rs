//! Translation dictionaries
/// Built-in en/fil tables
mod builtin;
/// Locale → key → text store
mod store;

pub use store::{
    KEY_SEPARATOR,
    StoreError,
    TranslationStore,
    flatten_json,
};
