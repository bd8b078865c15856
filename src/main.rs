//! Entry point: runs one page lifecycle against a JSON page file.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use page_i18n::config::ConfigManager;
use page_i18n::document::PageDocument;
use page_i18n::preference::FilePreferenceStore;
use page_i18n::translation::TranslationStore;
use page_i18n::{
    LocaleController,
    PageEvent,
};
use tracing_subscriber::EnvFilter;

/// Translate a page description the way the browser helper would.
#[derive(Debug, Parser)]
#[command(name = "page-i18n", version, about)]
struct Cli {
    /// Page description (JSON)
    page: PathBuf,

    /// Simulate the user picking this locale after the page is ready
    #[arg(long, value_name = "CODE")]
    select: Option<String>,

    /// File holding the persisted preference
    #[arg(long, value_name = "FILE", default_value = ".page-i18n-prefs.json")]
    prefs: PathBuf,

    /// Translation dictionary (JSON) replacing the built-in one
    #[arg(long, value_name = "FILE")]
    dictionary: Option<PathBuf>,

    /// Directory searched for `.page-i18n.json`
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Overwrite the page file instead of printing the result
    #[arg(long)]
    write: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config_manager = ConfigManager::new();
    config_manager.load_settings(cli.config_dir.as_deref())?;
    let settings = config_manager.get_settings().clone();

    let custom_dictionary = cli
        .dictionary
        .as_ref()
        .map(|path| {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read dictionary {}", path.display()))?;
            TranslationStore::from_json(&content)
                .with_context(|| format!("Invalid dictionary {}", path.display()))
        })
        .transpose()?;
    let translations = custom_dictionary.as_ref().unwrap_or(TranslationStore::builtin());

    let store = FilePreferenceStore::open(&cli.prefs)?;
    let page = PageDocument::load(&cli.page)
        .with_context(|| format!("Failed to load page {}", cli.page.display()))?;

    let mut controller = LocaleController::with_settings(store, page, translations, settings);
    controller.handle_event(PageEvent::Ready);
    if let Some(value) = cli.select {
        let selector_id = controller.settings().selector_id.clone();
        controller.handle_event(PageEvent::SelectionChanged { selector_id, value });
    }

    let (_, page) = controller.into_parts();
    if cli.write {
        page.save(&cli.page)?;
    } else {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", page.to_json_pretty()?)?;
    }

    Ok(())
}
