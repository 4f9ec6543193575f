//! Locale registry: Single source of truth for the two supported locales.
//!
//! The registry is immutable and initialized lazily with `OnceLock`, so every
//! request context can borrow `&'static` metadata without copying it.

use std::sync::OnceLock;

/// Reading direction of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Right-to-left (Arabic)
    Rtl,
    /// Left-to-right (French)
    Ltr,
}

impl Direction {
    /// Value of the HTML `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Rtl => "rtl",
            Direction::Ltr => "ltr",
        }
    }
}

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Two-letter tag, also the persisted preference value ("ar", "fr")
    pub code: &'static str,

    /// Native name shown on the language toggle
    pub native_name: &'static str,

    /// Reading direction
    pub direction: Direction,

    /// Whether this is the primary (default) locale; exactly one is
    pub is_primary: bool,
}

/// Global locale registry.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its tag.
    ///
    /// Matching is exact: "AR" or " ar" are not supported tags.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Get the primary locale configuration.
    ///
    /// # Panics
    /// Panics if the registry does not contain exactly one primary locale,
    /// which is a build-time configuration error.
    pub fn primary(&self) -> &LocaleConfig {
        let primary: Vec<_> = self.locales.iter().filter(|l| l.is_primary).collect();

        match primary.len() {
            0 => panic!("No primary locale found in registry"),
            1 => primary[0],
            _ => panic!("Multiple primary locales found in registry"),
        }
    }
}

/// Arabic (primary) and French.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "ar",
            native_name: "العربية",
            direction: Direction::Rtl,
            is_primary: true,
        },
        LocaleConfig {
            code: "fr",
            native_name: "Français",
            direction: Direction::Ltr,
            is_primary: false,
        },
    ]
}
