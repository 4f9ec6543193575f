//! Internationalization (i18n) module for the Arabic/French site.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported locales and their metadata
//! - `locale`: The `Locale` type and its derived properties (direction, tags)
//! - `strings`: The per-locale `Dictionary` constants
//! - `preference`: Storage of the locale preference
//! - `context`: Per-page-view locale state and its document attributes
//! - `validator`: Structural parity checks between the dictionaries
//!
//! # Example
//!
//! ```rust,ignore
//! use al_karama_site::i18n::{Locale, LocaleContext, MemoryStore};
//!
//! let mut ctx = LocaleContext::initialize(MemoryStore::new());
//! assert_eq!(ctx.locale(), Locale::Arabic);
//!
//! ctx.set_locale(Locale::French);
//! println!("{}", ctx.dictionary().nav.home);
//! ```

mod context;
mod locale;
mod preference;
mod registry;
mod strings;
mod validator;

pub use context::{DocumentAttributes, LocaleContext, ARABIC_FONT_CLASS};
pub use locale::Locale;
pub use preference::{MemoryStore, PreferenceStore, StorageError, PREFERENCE_KEY};
pub use registry::{Direction, LocaleConfig, LocaleRegistry};
pub use strings::{Dictionary, ARABIC_STRINGS, FRENCH_STRINGS};
pub use validator::{DictionaryValidator, ValidationReport};
