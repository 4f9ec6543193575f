//! Dictionary parity validation.
//!
//! The two locale dictionaries must expose exactly the same key paths. The
//! Rust structs already share one definition, but the dictionaries are also
//! served as JSON and inspected by the `check-dictionaries` binary, so parity
//! is checked on the serialized form where a missing or renamed key would
//! actually show up.

use crate::i18n::{Dictionary, Locale};
use serde_json::Value;
use std::collections::BTreeMap;

/// Validation report containing errors and warnings about a dictionary pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Structural problems: key paths missing or shaped differently
    pub errors: Vec<String>,

    /// Content problems that do not break rendering (empty strings)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind of a node at a key path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    Section,
    Text,
    Other,
}

impl NodeKind {
    fn of(value: &Value) -> NodeKind {
        match value {
            Value::Object(_) => NodeKind::Section,
            Value::String(_) => NodeKind::Text,
            _ => NodeKind::Other,
        }
    }
}

/// Validator for dictionary structure.
pub struct DictionaryValidator;

impl DictionaryValidator {
    /// Validate the built-in Arabic and French dictionaries against each other.
    pub fn validate_builtin() -> ValidationReport {
        let primary = serde_json::to_value(Dictionary::for_locale(Locale::Arabic))
            .unwrap_or(Value::Null);
        let secondary = serde_json::to_value(Dictionary::for_locale(Locale::French))
            .unwrap_or(Value::Null);
        Self::validate(
            (Locale::Arabic.code(), &primary),
            (Locale::French.code(), &secondary),
        )
    }

    /// Compare two serialized dictionaries.
    ///
    /// Each side is given as `(label, value)`; the label only appears in
    /// report messages.
    pub fn validate(left: (&str, &Value), right: (&str, &Value)) -> ValidationReport {
        let mut report = ValidationReport::new();

        let left_paths = Self::key_paths(left.1);
        let right_paths = Self::key_paths(right.1);

        for (path, kind) in &left_paths {
            match right_paths.get(path) {
                None => report
                    .errors
                    .push(format!("Key '{}' present in {} but missing in {}", path, left.0, right.0)),
                Some(other) if other != kind => report.errors.push(format!(
                    "Key '{}' is {:?} in {} but {:?} in {}",
                    path, kind, left.0, other, right.0
                )),
                Some(_) => {}
            }
        }
        for path in right_paths.keys() {
            if !left_paths.contains_key(path) {
                report
                    .errors
                    .push(format!("Key '{}' present in {} but missing in {}", path, right.0, left.0));
            }
        }

        for (label, value) in [left, right] {
            for path in Self::empty_strings(value) {
                report
                    .warnings
                    .push(format!("Empty string at '{}' in {}", path, label));
            }
        }

        report
    }

    /// Every key path in a dictionary, with the kind of node it names.
    ///
    /// Sections contribute their own path as well as their children, so a
    /// section replaced by a string is reported once as a kind mismatch.
    pub fn paths(value: &Value) -> Vec<String> {
        Self::key_paths(value).into_keys().collect()
    }

    fn key_paths(value: &Value) -> BTreeMap<String, NodeKind> {
        let mut paths = BTreeMap::new();
        Self::walk(value, "", &mut paths);
        paths
    }

    fn walk(value: &Value, prefix: &str, paths: &mut BTreeMap<String, NodeKind>) {
        if let Value::Object(map) = value {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                paths.insert(path.clone(), NodeKind::of(child));
                Self::walk(child, &path, paths);
            }
        }
    }

    fn empty_strings(value: &Value) -> Vec<String> {
        Self::key_paths(value)
            .into_iter()
            .filter(|(path, kind)| {
                *kind == NodeKind::Text
                    && Self::lookup(value, path)
                        .and_then(Value::as_str)
                        .map(|s| s.trim().is_empty())
                        .unwrap_or(false)
            })
            .map(|(path, _)| path)
            .collect()
    }

    /// Resolve a dotted key path.
    pub fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
        path.split('.').try_fold(value, |node, key| node.get(key))
    }
}
