//! Locale type: the two languages the site is published in.

use crate::i18n::{Direction, LocaleConfig, LocaleRegistry};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported locale.
///
/// Only these two values exist, so any `Locale` handed to the context is
/// valid by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "fr")]
    French,
}

impl Locale {
    /// Every locale, primary first.
    pub const ALL: [Locale; 2] = [Locale::Arabic, Locale::French];

    /// Create a Locale from its tag.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the tag is exactly "ar" or "fr"
    /// * `Err` for anything else, including different casing or whitespace
    pub fn from_code(code: &str) -> Result<Locale> {
        match LocaleRegistry::get().get_by_code(code) {
            Some(config) if config.code == "ar" => Ok(Locale::Arabic),
            Some(config) if config.code == "fr" => Ok(Locale::French),
            Some(config) => bail!("Locale '{}' has no Locale variant", config.code),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// The primary locale, used when no valid preference exists.
    pub fn primary() -> Locale {
        match LocaleRegistry::get().primary().code {
            "fr" => Locale::French,
            _ => Locale::Arabic,
        }
    }

    /// The two-letter tag ("ar", "fr").
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Arabic => "ar",
            Locale::French => "fr",
        }
    }

    /// Full registry entry for this locale.
    ///
    /// # Panics
    /// Panics if the registry lacks this tag, which cannot happen unless the
    /// registry and this enum are edited out of step.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code())
            .expect("every Locale variant is registered")
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn direction(&self) -> Direction {
        self.config().direction
    }

    pub fn is_primary(&self) -> bool {
        self.config().is_primary
    }

    /// The locale the language toggle switches to.
    pub fn other(&self) -> Locale {
        match self {
            Locale::Arabic => Locale::French,
            Locale::French => Locale::Arabic,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::primary()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Locale::from_code(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_arabic() {
        assert_eq!(Locale::from_code("ar").unwrap(), Locale::Arabic);
    }

    #[test]
    fn test_from_code_french() {
        assert_eq!(Locale::from_code("fr").unwrap(), Locale::French);
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Locale::from_code("en");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_rejects_case_and_whitespace() {
        assert!(Locale::from_code("AR").is_err());
        assert!(Locale::from_code("fr ").is_err());
        assert!(Locale::from_code("").is_err());
    }

    #[test]
    fn test_parse_via_from_str() {
        let locale: Locale = "fr".parse().unwrap();
        assert_eq!(locale, Locale::French);
    }

    // ==================== Metadata Tests ====================

    #[test]
    fn test_primary_is_arabic() {
        assert_eq!(Locale::primary(), Locale::Arabic);
        assert_eq!(Locale::default(), Locale::Arabic);
        assert!(Locale::Arabic.is_primary());
        assert!(!Locale::French.is_primary());
    }

    #[test]
    fn test_direction_is_rtl_only_for_primary() {
        for locale in Locale::ALL {
            assert_eq!(locale.direction() == Direction::Rtl, locale.is_primary());
        }
    }

    #[test]
    fn test_other_toggles() {
        assert_eq!(Locale::Arabic.other(), Locale::French);
        assert_eq!(Locale::French.other(), Locale::Arabic);
        assert_eq!(Locale::French.other().other(), Locale::French);
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(Locale::Arabic.to_string(), "ar");
        assert_eq!(format!("{}", Locale::French), "fr");
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Locale::French).unwrap(), "\"fr\"");
        let parsed: Locale = serde_json::from_str("\"ar\"").unwrap();
        assert_eq!(parsed, Locale::Arabic);
    }
}
