//! Static bilingual content shown on the site pages.
//!
//! Every displayable attribute is a single [`Localized`] value; pages call
//! `resolve(locale)` instead of picking between parallel fields.

pub mod association;
pub mod cinema;
pub mod format;
pub mod media;
pub mod partners;
pub mod theatre;
pub mod training;

use crate::i18n::Locale;
use serde::Serialize;

/// A piece of text authored in both locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Localized {
    pub ar: &'static str,
    pub fr: &'static str,
}

impl Localized {
    pub const fn new(ar: &'static str, fr: &'static str) -> Self {
        Self { ar, fr }
    }

    /// The text for `locale`.
    pub fn resolve(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Arabic => self.ar,
            Locale::French => self.fr,
        }
    }
}

/// Shorthand for building `Localized` constants.
pub(crate) const fn l(ar: &'static str, fr: &'static str) -> Localized {
    Localized::new(ar, fr)
}
