use super::{FormKind, Rule, Validate};
use serde::{Deserialize, Serialize};

/// Cine-club membership application.
///
/// Age arrives as text like every other field. Phone is only length-checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub motivation: String,
}

const CONSTRAINTS: &[(&str, Rule, &str)] = &[
    (
        "fullName",
        Rule::MinLength { min: 3 },
        "Name must be at least 3 characters",
    ),
    (
        "age",
        Rule::Range { min: 10, max: 100 },
        "Age must be between 10 and 100",
    ),
    (
        "phone",
        Rule::MinLength { min: 10 },
        "Please enter a valid phone number",
    ),
    ("email", Rule::Email, "Please enter a valid email"),
    (
        "motivation",
        Rule::MinLength { min: 20 },
        "Please write at least 20 characters",
    ),
];

impl Validate for RegistrationForm {
    const KIND: FormKind = FormKind::Registration;
    const FIELDS: &'static [&'static str] = &["fullName", "age", "phone", "email", "motivation"];

    fn constraints() -> &'static [(&'static str, Rule, &'static str)] {
        CONSTRAINTS
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "fullName" => Some(&self.full_name),
            "age" => Some(&self.age),
            "phone" => Some(&self.phone),
            "email" => Some(&self.email),
            "motivation" => Some(&self.motivation),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: String) -> bool {
        match name {
            "fullName" => self.full_name = value,
            "age" => self.age = value,
            "phone" => self.phone = value,
            "email" => self.email = value,
            "motivation" => self.motivation = value,
            _ => return false,
        }
        true
    }
}
