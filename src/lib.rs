//! page-i18n
//!
//! en/fil ページ翻訳ヘルパー: 翻訳辞書、言語設定の永続化、`data-i18n` 要素の書き換え

pub mod config;
pub mod controller;
pub mod document;
pub mod preference;
pub mod translation;
pub mod types;

mod test_utils;

pub use controller::{
    ApplyReport,
    LocaleController,
    PageEvent,
};
pub use types::{
    ElementKind,
    Locale,
    UnknownLocale,
};
