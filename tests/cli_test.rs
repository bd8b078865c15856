//! `page-i18n` バイナリのテスト

#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]
#![allow(missing_docs)]

use std::fs;
use std::path::{
    Path,
    PathBuf,
};
use std::process::{
    Command,
    Output,
};

use googletest::prelude::*;
use page_i18n::document::PageDocument;
use rstest::{
    fixture,
    rstest,
};
use tempfile::TempDir;

const LOGIN_PAGE: &str = r#"{
    "elements": [
        {"tag": "select", "id": "languageSelector"},
        {"tag": "h1", "id": "title", "attributes": {"data-i18n": "welcome"}, "text": "Welcome"},
        {"tag": "input", "id": "user", "attributes": {"data-i18n": "enter_username"}},
        {"tag": "a", "id": "back", "attributes": {"data-i18n": "back"}, "text": "Back"}
    ]
}"#;

/// ページ・設定ファイルを置く作業ディレクトリ
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// `--prefs` を常に作業ディレクトリ内に向けて実行する
    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_page-i18n"))
            .arg(self.path("page.json"))
            .arg("--prefs")
            .arg(self.path("prefs.json"))
            .args(args)
            .current_dir(self.dir.path())
            .output()
            .unwrap()
    }
}

#[fixture]
fn workspace() -> Workspace {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("page.json"), LOGIN_PAGE).unwrap();
    Workspace { dir }
}

fn stdout_page(output: &Output) -> PageDocument {
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    PageDocument::from_json(&String::from_utf8_lossy(&output.stdout)).unwrap()
}

fn text<'a>(page: &'a PageDocument, id: &str) -> &'a str {
    page.find_by_id(id).map_or("", |element| element.text.as_str())
}

fn read_page(path: &Path) -> PageDocument {
    PageDocument::load(path).unwrap()
}

#[rstest]
fn test_prints_translated_page(workspace: Workspace) {
    let page = stdout_page(&workspace.run(&[]));

    assert_eq!(text(&page, "title"), "Welcome");
    assert_eq!(page.find_by_id("languageSelector").unwrap().value.as_deref(), Some("en"));
    assert!(!workspace.path("prefs.json").exists());
}

#[rstest]
fn test_select_persists_choice(workspace: Workspace) {
    let page = stdout_page(&workspace.run(&["--select", "fil"]));
    assert_eq!(text(&page, "title"), "Maligayang pagdating");
    assert_eq!(
        page.find_by_id("user").unwrap().placeholder.as_deref(),
        Some("Ilagay ang username")
    );

    let prefs = fs::read_to_string(workspace.path("prefs.json")).unwrap();
    assert!(prefs.contains(r#""language": "fil""#), "{prefs}");

    // next run without --select starts in Filipino
    let page = stdout_page(&workspace.run(&[]));
    assert_eq!(text(&page, "title"), "Maligayang pagdating");
}

#[rstest]
#[case::unknown_code("es")]
#[case::wrong_case("FIL")]
fn test_select_invalid_code_falls_back_to_english(workspace: Workspace, #[case] code: &str) {
    let page = stdout_page(&workspace.run(&["--select", code]));

    assert_eq!(text(&page, "title"), "Welcome");
    let prefs = fs::read_to_string(workspace.path("prefs.json")).unwrap();
    assert!(prefs.contains(r#""language": "en""#), "{prefs}");
}

#[rstest]
fn test_write_rewrites_page_file(workspace: Workspace) {
    let output = workspace.run(&["--select", "fil", "--write"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let page = read_page(&workspace.path("page.json"));
    assert_eq!(text(&page, "title"), "Maligayang pagdating");
    assert_eq!(text(&page, "back"), "Bumalik");
}

#[rstest]
fn test_dictionary_replaces_builtin_tables(workspace: Workspace) {
    fs::write(
        workspace.path("dictionary.json"),
        r#"{"en": {"welcome": "Hello"}, "fil": {"welcome": "Kumusta"}}"#,
    )
    .unwrap();

    let page = stdout_page(&workspace.run(&["--dictionary", "dictionary.json", "--select", "fil"]));

    assert_eq!(text(&page, "title"), "Kumusta");
    // not in the custom dictionary
    assert_eq!(text(&page, "back"), "Back");
    assert_that!(page.find_by_id("user").unwrap().placeholder, none());
}

#[rstest]
#[case::unknown_locale(r#"{"es": {"welcome": "Hola"}}"#)]
#[case::not_json("welcome = Hello")]
fn test_invalid_dictionary_fails(workspace: Workspace, #[case] dictionary: &str) {
    fs::write(workspace.path("dictionary.json"), dictionary).unwrap();

    let output = workspace.run(&["--dictionary", "dictionary.json", "--write"]);

    assert!(!output.status.success());
    assert_eq!(fs::read_to_string(workspace.path("page.json")).unwrap(), LOGIN_PAGE);
}

#[rstest]
fn test_corrupt_prefs_file_still_runs(workspace: Workspace) {
    fs::write(workspace.path("prefs.json"), "not json").unwrap();

    let page = stdout_page(&workspace.run(&[]));

    assert_eq!(text(&page, "title"), "Welcome");
}

#[rstest]
fn test_config_dir_selects_marker_attribute(workspace: Workspace) {
    fs::write(
        workspace.path("page.json"),
        r#"{"elements": [
            {"tag": "select", "id": "lang"},
            {"tag": "h1", "id": "title", "attributes": {"data-t": "welcome"}, "text": "Hi"}
        ]}"#,
    )
    .unwrap();
    fs::write(
        workspace.path(".page-i18n.json"),
        r#"{"selectorId": "lang", "markerAttribute": "data-t", "storageKey": "locale"}"#,
    )
    .unwrap();

    let dir = workspace.dir.path().to_str().unwrap();
    let page = stdout_page(&workspace.run(&["--config-dir", dir, "--select", "fil"]));

    assert_eq!(text(&page, "title"), "Maligayang pagdating");
    let prefs = fs::read_to_string(workspace.path("prefs.json")).unwrap();
    assert!(prefs.contains(r#""locale": "fil""#), "{prefs}");
}
