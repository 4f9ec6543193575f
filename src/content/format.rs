//! Locale-aware date and time formatting.
//!
//! Dates follow the long form of the `ar-MA` and `fr-FR` conventions:
//! day, month name, year. Moroccan Arabic uses its own month names
//! (e.g. "ماي", "غشت") and Latin digits.

use crate::i18n::Locale;
use chrono::{Datelike, NaiveDate, NaiveTime};

const MONTHS_AR_MA: [&str; 12] = [
    "يناير", "فبراير", "مارس", "أبريل", "ماي", "يونيو", "يوليوز", "غشت", "شتنبر", "أكتوبر",
    "نونبر", "دجنبر",
];

const MONTHS_FR: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
    "octobre", "novembre", "décembre",
];

/// Name of a month (1-12) in the given locale.
pub fn month_name(month: u32, locale: Locale) -> Option<&'static str> {
    let idx = usize::try_from(month).ok()?.checked_sub(1)?;
    match locale {
        Locale::Arabic => MONTHS_AR_MA.get(idx).copied(),
        Locale::French => MONTHS_FR.get(idx).copied(),
    }
}

/// "15 فبراير 2024" / "15 février 2024".
pub fn format_date(date: NaiveDate, locale: Locale) -> String {
    let month = month_name(date.month(), locale).unwrap_or_default();
    format!("{} {} {}", date.day(), month, date.year())
}

/// Format an ISO `YYYY-MM-DD` string; unparseable input is returned as is.
pub fn format_iso_date(iso: &str, locale: Locale) -> String {
    match parse_iso_date(iso) {
        Some(date) => format_date(date, locale),
        None => iso.to_string(),
    }
}

pub fn parse_iso_date(iso: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d").ok()
}

/// Two-digit 24h time ("19:00"). Both locales use the same form.
///
/// Input is `H:M` or `HH:MM`; unparseable input is returned as is.
pub fn format_time(time: &str, _locale: Locale) -> String {
    match NaiveTime::parse_from_str(time, "%H:%M") {
        Ok(t) => t.format("%H:%M").to_string(),
        Err(_) => time.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_arabic() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        assert_eq!(format_date(date, Locale::Arabic), "15 فبراير 2024");
    }

    #[test]
    fn test_format_date_french() {
        let date = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
        assert_eq!(format_date(date, Locale::French), "1 août 2024");
    }

    #[test]
    fn test_moroccan_month_names() {
        assert_eq!(month_name(5, Locale::Arabic), Some("ماي"));
        assert_eq!(month_name(8, Locale::Arabic), Some("غشت"));
        assert_eq!(month_name(12, Locale::Arabic), Some("دجنبر"));
    }

    #[test]
    fn test_month_name_out_of_range() {
        assert_eq!(month_name(0, Locale::French), None);
        assert_eq!(month_name(13, Locale::Arabic), None);
    }

    #[test]
    fn test_format_iso_date_passthrough_on_garbage() {
        assert_eq!(format_iso_date("soon", Locale::French), "soon");
        assert_eq!(format_iso_date("2024-03-08", Locale::French), "8 mars 2024");
    }

    #[test]
    fn test_format_time_pads() {
        assert_eq!(format_time("19:00", Locale::Arabic), "19:00");
        assert_eq!(format_time("9:05", Locale::French), "09:05");
        assert_eq!(format_time("late", Locale::French), "late");
    }
}
