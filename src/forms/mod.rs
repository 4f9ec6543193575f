//! Contact and registration forms.
//!
//! Validation is synchronous and total: every field is checked on its own
//! and every failing field produces exactly one error. There is no
//! cross-field validation.
//!
//! Error messages are authored in a single language. Each error also
//! carries the code of the rule that failed so a caller can substitute its
//! own text.

mod contact;
mod controller;
mod registration;
pub mod rules;

pub use contact::ContactForm;
pub use controller::{FormController, FormPhase, SubmitError};
pub use registration::RegistrationForm;
pub use rules::Rule;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fmt;

/// Which form a payload belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Contact,
    Registration,
}

impl FormKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::Contact => "contact",
            FormKind::Registration => "registration",
        }
    }
}

/// One failed field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field name as it appears in the form payload (`fullName`, `email`, ...)
    pub field: &'static str,
    pub rule: Rule,
    pub message: &'static str,
}

/// Per-field errors, in field declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The error for `field`, if it failed.
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn fields(&self) -> Vec<&'static str> {
        self.errors.iter().map(|e| e.field).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// `Ok(())` when nothing failed.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Serialized as `{ "field": "message", ... }`.
impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for error in &self.errors {
            map.serialize_entry(error.field, error.message)?;
        }
        map.end()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// A form with a fixed field set and per-field constraints.
pub trait Validate {
    const KIND: FormKind;

    /// Field names in display order.
    const FIELDS: &'static [&'static str];

    /// Constraint and message for each field, in `FIELDS` order.
    fn constraints() -> &'static [(&'static str, Rule, &'static str)];

    /// Raw value of a field.
    fn field(&self, name: &str) -> Option<&str>;

    /// Overwrite a field. Returns `false` for unknown field names.
    fn set_field(&mut self, name: &str, value: String) -> bool;

    /// Check every field independently.
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for &(field, rule, message) in Self::constraints() {
            let value = self.field(field).unwrap_or_default();
            if !rule.check(value) {
                errors.push(FieldError {
                    field,
                    rule,
                    message,
                });
            }
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_serialize_as_map() {
        let mut errors = ValidationErrors::new();
        errors.push(FieldError {
            field: "name",
            rule: Rule::MinLength { min: 3 },
            message: "Name must be at least 3 characters",
        });
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["name"], "Name must be at least 3 characters");
    }

    #[test]
    fn test_validation_errors_display() {
        let mut errors = ValidationErrors::new();
        errors.push(FieldError {
            field: "email",
            rule: Rule::Email,
            message: "Please enter a valid email",
        });
        assert_eq!(errors.to_string(), "email: Please enter a valid email");
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }

    #[test]
    fn test_form_kind_names() {
        assert_eq!(FormKind::Contact.as_str(), "contact");
        assert_eq!(
            serde_json::to_string(&FormKind::Registration).unwrap(),
            "\"registration\""
        );
    }
}
