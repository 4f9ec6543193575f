//! Locale preference storage.
//!
//! The preference is a single key holding "ar" or "fr". In the browser it is
//! a cookie (see `server::cookies::CookieStore`); tests use `MemoryStore`.

use std::collections::HashMap;
use thiserror::Error;

/// Storage key of the locale preference.
pub const PREFERENCE_KEY: &str = "al-karama-language";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),

    #[error("stored preference is not valid text: {0}")]
    Unreadable(String),
}

/// Key-value storage for the locale preference.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store. Can be made unavailable to exercise the fallback path.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    unavailable: bool,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `value` under the preference key.
    pub fn with_preference(value: &str) -> Self {
        let mut store = Self::new();
        store
            .values
            .insert(PREFERENCE_KEY.to_string(), value.to_string());
        store
    }

    /// A store where every read and write fails, like disabled browser storage.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable("storage disabled".to_string()));
        }
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable("storage disabled".to_string()));
        }
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load(PREFERENCE_KEY).unwrap(), None);

        store.save(PREFERENCE_KEY, "fr").unwrap();
        assert_eq!(store.load(PREFERENCE_KEY).unwrap(), Some("fr".to_string()));
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn test_with_preference_does_not_count_as_write() {
        let store = MemoryStore::with_preference("ar");
        assert_eq!(store.get(PREFERENCE_KEY), Some("ar"));
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_unavailable_store_fails_both_ways() {
        let mut store = MemoryStore::unavailable();
        assert!(matches!(
            store.load(PREFERENCE_KEY),
            Err(StorageError::Unavailable(_))
        ));
        assert!(store.save(PREFERENCE_KEY, "fr").is_err());
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::Unavailable("storage disabled".to_string());
        assert_eq!(
            err.to_string(),
            "preference storage unavailable: storage disabled"
        );
    }
}
