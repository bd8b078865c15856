//! Locale controller
//!
//! Owns the active-locale preference and pushes it into a [`Document`]. Every
//! anomaly (unknown locale, missing selector, missing key) is absorbed: nothing
//! here returns an error.

use crate::config::LocaleSettings;
use crate::document::{
    Document,
    SelectorOption,
};
use crate::preference::PreferenceStore;
use crate::translation::TranslationStore;
use crate::types::{
    ElementKind,
    Locale,
};

/// Events delivered by the page, one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// The document finished loading.
    Ready,
    /// The user picked an option in a selector.
    SelectionChanged {
        /// Id of the selector that changed
        selector_id: String,
        /// Raw option value, not yet validated as a locale
        value: String,
    },
}

/// Outcome of one [`LocaleController::apply_translations`] pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ApplyReport {
    /// Locale the pass looked keys up in
    pub locale: Locale,
    /// Elements whose text or placeholder was written
    pub updated: usize,
    /// Elements left untouched because their key is unknown
    pub skipped: usize,
}

/// Applies translations to a document and keeps the preference in sync.
#[derive(Debug)]
pub struct LocaleController<'t, P, D> {
    /// Persisted preference backend
    store: P,
    /// Page being translated
    document: D,
    /// Dictionary used for lookups
    translations: &'t TranslationStore,
    /// Storage key, selector id and marker attribute
    settings: LocaleSettings,
    /// Selector ids whose change events are handled
    bound_selectors: Vec<String>,
}

impl<'t, P: PreferenceStore, D: Document> LocaleController<'t, P, D> {
    /// Creates a controller using the built-in dictionary and default settings.
    #[must_use]
    pub fn new(store: P, document: D) -> Self {
        Self::with_settings(store, document, TranslationStore::builtin(), LocaleSettings::default())
    }

    /// Creates a controller over an explicit dictionary and settings.
    #[must_use]
    pub fn with_settings(
        store: P,
        document: D,
        translations: &'t TranslationStore,
        settings: LocaleSettings,
    ) -> Self {
        Self { store, document, translations, settings, bound_selectors: Vec::new() }
    }

    /// Active locale from the preference store; `en` when absent or invalid.
    #[must_use]
    pub fn current_locale(&self) -> Locale {
        let stored = self.store.get(&self.settings.storage_key);
        let locale = Locale::resolve(stored.as_deref());
        if let Some(raw) = stored.as_deref()
            && raw != locale.code()
        {
            tracing::debug!("Ignoring invalid stored locale '{}', using '{}'", raw, locale);
        }
        locale
    }

    /// Persists `candidate` (or `en` if it is not a valid code) and re-applies
    /// translations.
    pub fn set_locale(&mut self, candidate: &str) {
        let locale = Locale::resolve(Some(candidate));
        if candidate != locale.code() {
            tracing::debug!("Unknown locale '{}', falling back to '{}'", candidate, locale);
        }

        self.store.set(&self.settings.storage_key, locale.code());
        self.apply_translations(locale);
    }

    /// Writes the localized text of every marked element.
    ///
    /// Text fields receive it as placeholder, other elements as visible text.
    /// Elements whose key has no entry for `locale` are left as they are.
    pub fn apply_translations(&mut self, locale: Locale) -> ApplyReport {
        let translations = self.translations;
        let mut report = ApplyReport { locale, ..ApplyReport::default() };

        for element in self.document.marked_elements(&self.settings.marker_attribute) {
            let Some(text) = translations.lookup(locale, &element.key) else {
                tracing::trace!("No '{}' translation for key '{}'", locale, element.key);
                report.skipped += 1;
                continue;
            };

            match element.kind {
                ElementKind::TextField => self.document.set_placeholder(element.handle, text),
                ElementKind::DisplayElement => self.document.set_text(element.handle, text),
            }
            report.updated += 1;
        }

        tracing::debug!(
            "Applied '{}' translations: {} updated, {} skipped",
            locale,
            report.updated,
            report.skipped
        );
        report
    }

    /// Populates the language selector, selects the active locale and applies it.
    ///
    /// Does nothing when the page has no element with `selector_id`. Option
    /// labels always come from the English table.
    pub fn setup_selector(&mut self, selector_id: &str) {
        let Some(selector) = self.document.find_selector(selector_id) else {
            tracing::debug!("Selector '{}' not found, skipping setup", selector_id);
            return;
        };

        let options = self.selector_options();
        self.document.set_selector_options(selector, &options);

        let locale = self.current_locale();
        self.document.set_selector_value(selector, locale);
        self.apply_translations(locale);

        if !self.bound_selectors.iter().any(|id| id == selector_id) {
            self.bound_selectors.push(selector_id.to_string());
        }
    }

    /// Dispatches a page event.
    pub fn handle_event(&mut self, event: PageEvent) {
        match event {
            PageEvent::Ready => {
                let selector_id = self.settings.selector_id.clone();
                self.setup_selector(&selector_id);
            }
            PageEvent::SelectionChanged { selector_id, value } => {
                if self.bound_selectors.contains(&selector_id) {
                    self.set_locale(&value);
                } else {
                    tracing::debug!("Ignoring change on unbound selector '{}'", selector_id);
                }
            }
        }
    }

    /// One option per supported locale, labeled from the `en` table.
    fn selector_options(&self) -> Vec<SelectorOption> {
        Locale::ALL
            .iter()
            .map(|&value| SelectorOption {
                value,
                label: self
                    .translations
                    .lookup(Locale::En, value.label_key())
                    .unwrap_or(value.code())
                    .to_string(),
            })
            .collect()
    }

    /// Preference backend.
    #[must_use]
    pub const fn store(&self) -> &P {
        &self.store
    }

    /// Page being translated.
    #[must_use]
    pub const fn document(&self) -> &D {
        &self.document
    }

    /// Active settings.
    #[must_use]
    pub const fn settings(&self) -> &LocaleSettings {
        &self.settings
    }

    /// Gives back the store and the document.
    #[must_use]
    pub fn into_parts(self) -> (P, D) {
        (self.store, self.document)
    }
}
