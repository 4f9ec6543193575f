use super::{FormKind, Rule, Validate};
use serde::{Deserialize, Serialize};

/// Contact page message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

const CONSTRAINTS: &[(&str, Rule, &str)] = &[
    (
        "name",
        Rule::MinLength { min: 3 },
        "Name must be at least 3 characters",
    ),
    ("email", Rule::Email, "Please enter a valid email"),
    (
        "message",
        Rule::MinLength { min: 20 },
        "Message must be at least 20 characters",
    ),
];

impl Validate for ContactForm {
    const KIND: FormKind = FormKind::Contact;
    const FIELDS: &'static [&'static str] = &["name", "email", "message"];

    fn constraints() -> &'static [(&'static str, Rule, &'static str)] {
        CONSTRAINTS
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "email" => Some(&self.email),
            "message" => Some(&self.message),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: String) -> bool {
        match name {
            "name" => self.name = value,
            "email" => self.email = value,
            "message" => self.message = value,
            _ => return false,
        }
        true
    }
}
