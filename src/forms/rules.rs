//! Field constraints shared by the two forms.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// A field constraint. The code is stable and can be used to look up a
/// translated message; the message is the text shown today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Rule {
    MinLength { min: usize },
    Email,
    Range { min: i64, max: i64 },
}

impl Rule {
    pub fn code(&self) -> &'static str {
        match self {
            Rule::MinLength { .. } => "min_length",
            Rule::Email => "email",
            Rule::Range { .. } => "range",
        }
    }

    /// Whether `value` satisfies the rule.
    pub fn check(&self, value: &str) -> bool {
        match *self {
            Rule::MinLength { min } => char_len(value) >= min,
            Rule::Email => is_email(value),
            Rule::Range { min, max } => parse_leading_int(value)
                .map(|n| (min..=max).contains(&n))
                .unwrap_or(false),
        }
    }
}

// Local part and domain as accepted by the form library the site used:
// no leading dot, no consecutive dots, TLD of at least two letters.
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

/// Length in characters, not bytes: "علي" is 3.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn is_email(value: &str) -> bool {
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
            .expect("email pattern is valid")
    });

    !value.starts_with('.') && !value.contains("..") && regex.is_match(value)
}

/// Parse the integer at the start of `value`, ignoring leading whitespace
/// and anything after the digits ("42 ans" is 42, "4.5" is 4). Returns
/// `None` when no digits lead the string.
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let s = value.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==================== Length Tests ====================

    #[test]
    fn test_char_len_counts_characters() {
        assert_eq!(char_len("Al"), 2);
        assert_eq!(char_len("علي"), 3);
        assert_eq!(char_len(""), 0);
    }

    #[test]
    fn test_min_length_boundary() {
        let rule = Rule::MinLength { min: 3 };
        assert!(!rule.check("Al"));
        assert!(rule.check("Ali"));
        assert!(rule.check("علي"));
    }

    // ==================== Email Tests ====================

    #[test]
    fn test_valid_emails() {
        for email in [
            "x@y.com",
            "ali@example.com",
            "first.last+club@mail.example.ma",
            "O'Neil@Example.FR",
        ] {
            assert!(is_email(email), "{}", email);
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "plainaddress",
            "@example.com",
            "ali@",
            "ali@example",
            "ali@example.c",
            ".ali@example.com",
            "ali..ben@example.com",
            "ali.@example.com",
            "ali @example.com",
        ] {
            assert!(!is_email(email), "{}", email);
        }
    }

    // ==================== Integer Parsing Tests ====================

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("  17"), Some(17));
        assert_eq!(parse_leading_int("42 ans"), Some(42));
        assert_eq!(parse_leading_int("4.5"), Some(4));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn test_range_rule_inclusive() {
        let rule = Rule::Range { min: 10, max: 100 };
        assert!(!rule.check("9"));
        assert!(rule.check("10"));
        assert!(rule.check("100"));
        assert!(!rule.check("101"));
        assert!(!rule.check("twenty"));
    }

    #[test]
    fn test_rule_codes() {
        assert_eq!(Rule::MinLength { min: 3 }.code(), "min_length");
        assert_eq!(Rule::Email.code(), "email");
        assert_eq!(Rule::Range { min: 1, max: 2 }.code(), "range");
    }

    proptest! {
        #[test]
        fn prop_range_matches_integer_bounds(n in -1000i64..1000) {
            let rule = Rule::Range { min: 10, max: 100 };
            prop_assert_eq!(rule.check(&n.to_string()), (10..=100).contains(&n));
        }

        #[test]
        fn prop_min_length_matches_char_count(s in "\\PC{0,30}") {
            let rule = Rule::MinLength { min: 20 };
            prop_assert_eq!(rule.check(&s), s.chars().count() >= 20);
        }
    }
}
