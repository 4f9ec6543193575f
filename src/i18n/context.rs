//! Locale context: the active locale and everything derived from it.
//!
//! A context is created once per page view from the preference store and
//! handed to everything that renders text. There is no global instance; two
//! contexts over two stores are fully independent.

use crate::i18n::{Dictionary, Direction, Locale, PreferenceStore, PREFERENCE_KEY};
use tracing::{debug, warn};

/// Body class that selects the Arabic font.
pub const ARABIC_FONT_CLASS: &str = "font-arabic";

/// Document-level attributes that follow the locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentAttributes {
    /// `<html dir>`
    pub dir: Direction,
    /// `<html lang>`
    pub lang: &'static str,
    /// Whether `font-arabic` is on `<body>`
    pub arabic_font: bool,
}

impl DocumentAttributes {
    pub fn for_locale(locale: Locale) -> Self {
        Self {
            dir: locale.direction(),
            lang: locale.code(),
            arabic_font: locale == Locale::Arabic,
        }
    }

    /// Value of the body `class` attribute.
    pub fn body_class(&self) -> &'static str {
        if self.arabic_font {
            ARABIC_FONT_CLASS
        } else {
            ""
        }
    }
}

/// Active locale plus the store it persists to.
#[derive(Debug)]
pub struct LocaleContext<S> {
    locale: Locale,
    document: DocumentAttributes,
    document_revision: u64,
    persisted: Option<Locale>,
    store: S,
}

impl<S: PreferenceStore> LocaleContext<S> {
    /// Read the stored preference and adopt it if it is a supported tag.
    ///
    /// Missing, unsupported or unreadable values all yield the primary
    /// locale. A failing store is logged and otherwise ignored; the context
    /// then lives in memory only.
    pub fn initialize(store: S) -> Self {
        let stored = match store.load(PREFERENCE_KEY) {
            Ok(value) => value,
            Err(e) => {
                warn!("Locale preference unreadable, using default: {}", e);
                None
            }
        };

        let persisted = stored
            .as_deref()
            .and_then(|code| Locale::from_code(code).ok());
        if persisted.is_none() {
            if let Some(raw) = &stored {
                debug!("Ignoring unsupported stored locale {:?}", raw);
            }
        }

        let locale = persisted.unwrap_or_else(Locale::primary);
        Self {
            locale,
            document: DocumentAttributes::for_locale(locale),
            document_revision: 1,
            persisted,
            store,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// The full dictionary of the active locale.
    pub fn dictionary(&self) -> &'static Dictionary {
        Dictionary::for_locale(self.locale)
    }

    /// `Rtl` iff the active locale is the primary one.
    pub fn direction(&self) -> Direction {
        self.locale.direction()
    }

    pub fn is_primary(&self) -> bool {
        self.locale.is_primary()
    }

    pub fn document(&self) -> DocumentAttributes {
        self.document
    }

    /// Number of times the document attributes were applied, starting at 1
    /// for the initial render.
    pub fn document_revision(&self) -> u64 {
        self.document_revision
    }

    /// Switch to `locale` and persist it.
    ///
    /// Returns whether the active locale changed. Setting the locale that is
    /// already active and already stored does nothing at all.
    pub fn set_locale(&mut self, locale: Locale) -> bool {
        let changed = self.locale != locale;
        if changed {
            debug!("Locale {} -> {}", self.locale, locale);
            self.locale = locale;
            self.apply_document();
        }

        if self.persisted != Some(locale) {
            match self.store.save(PREFERENCE_KEY, locale.code()) {
                Ok(()) => self.persisted = Some(locale),
                Err(e) => warn!("Could not persist locale {}: {}", locale, e),
            }
        }

        changed
    }

    /// Switch to the other locale and return it.
    pub fn toggle(&mut self) -> Locale {
        let next = self.locale.other();
        self.set_locale(next);
        next
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn apply_document(&mut self) {
        let next = DocumentAttributes::for_locale(self.locale);
        if next != self.document {
            self.document = next;
            self.document_revision += 1;
        }
    }
}
