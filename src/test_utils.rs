//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]

use crate::document::{
    DEFAULT_MARKER_ATTRIBUTE,
    PageDocument,
    PageElement,
};

/// テスト用のログインページを作成する
///
/// - `languageSelector`: 言語セレクタ
/// - `title` / `submit`: 翻訳対象のテキスト要素
/// - `username` / `password`: プレースホルダーを持つ入力欄
/// - `promo`: 辞書に存在しないキーを持つ要素
pub(crate) fn login_page() -> PageDocument {
    let mut page = PageDocument::new();
    page.push(PageElement::new("select").with_id("languageSelector"));
    page.push(
        PageElement::new("h1")
            .with_id("title")
            .with_attribute(DEFAULT_MARKER_ATTRIBUTE, "welcome")
            .with_text("Welcome (static)"),
    );
    page.push(
        PageElement::new("input")
            .with_id("username")
            .with_attribute(DEFAULT_MARKER_ATTRIBUTE, "enter_username"),
    );
    page.push(
        PageElement::new("input")
            .with_id("password")
            .with_attribute(DEFAULT_MARKER_ATTRIBUTE, "enter_password"),
    );
    page.push(
        PageElement::new("button")
            .with_id("submit")
            .with_attribute(DEFAULT_MARKER_ATTRIBUTE, "login")
            .with_text("Login"),
    );
    page.push(
        PageElement::new("p")
            .with_id("promo")
            .with_attribute(DEFAULT_MARKER_ATTRIBUTE, "summer_sale")
            .with_text("Summer sale"),
    );
    page
}

/// id で要素を探し、そのテキストを返す（存在しない場合は空文字）
pub(crate) fn text_of<'a>(page: &'a PageDocument, id: &str) -> &'a str {
    page.find_by_id(id).map_or("", |element| element.text.as_str())
}
