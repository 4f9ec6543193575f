//! Check that the Arabic and French dictionaries have the same key paths.
//!
//! Usage:
//!   cargo run --bin check-dictionaries
//!
//! Exits with status 1 when a key path is missing on one side or has a
//! different shape. Empty strings are reported as warnings only.

use al_karama_site::i18n::{Dictionary, DictionaryValidator, Locale};
use anyhow::Result;

fn main() -> Result<()> {
    let report = DictionaryValidator::validate_builtin();

    for locale in Locale::ALL {
        let json = serde_json::to_value(Dictionary::for_locale(locale))?;
        println!(
            "{} ({}): {} keys",
            locale.native_name(),
            locale.code(),
            DictionaryValidator::paths(&json).len()
        );
    }

    for warning in &report.warnings {
        println!("warning: {}", warning);
    }
    for error in &report.errors {
        eprintln!("error: {}", error);
    }

    if report.has_errors() {
        eprintln!("{} error(s) found", report.errors.len());
        std::process::exit(1);
    }

    println!("Dictionaries are in parity");
    Ok(())
}
