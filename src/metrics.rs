//! Site metrics: page views per locale, locale switches and form outcomes.

use crate::i18n::Locale;
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters shared by all request handlers through the app state.
#[derive(Debug, Default)]
pub struct SiteMetrics {
    /// Pages rendered in Arabic
    views_arabic: AtomicUsize,

    /// Pages rendered in French
    views_french: AtomicUsize,

    /// Locale changes that actually switched the language
    locale_switches: AtomicUsize,

    /// Form submissions that passed validation and were delivered
    submissions_accepted: AtomicUsize,

    /// Form submissions rejected by validation
    submissions_rejected: AtomicUsize,

    /// Valid submissions the submitter failed to deliver
    submissions_failed: AtomicUsize,
}

impl SiteMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_view(&self, locale: Locale) {
        match locale {
            Locale::Arabic => self.views_arabic.fetch_add(1, Ordering::Relaxed),
            Locale::French => self.views_french.fetch_add(1, Ordering::Relaxed),
        };
    }

    pub fn record_locale_switch(&self) {
        self.locale_switches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_submission_accepted(&self) {
        self.submissions_accepted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_submission_rejected(&self) {
        self.submissions_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_submission_failed(&self) {
        self.submissions_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn views(&self, locale: Locale) -> usize {
        match locale {
            Locale::Arabic => self.views_arabic.load(Ordering::Relaxed),
            Locale::French => self.views_french.load(Ordering::Relaxed),
        }
    }

    pub fn locale_switches(&self) -> usize {
        self.locale_switches.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let views_arabic = self.views(Locale::Arabic);
        let views_french = self.views(Locale::French);
        let total_views = views_arabic + views_french;
        let arabic_share = if total_views > 0 {
            (views_arabic as f64 / total_views as f64) * 100.0
        } else {
            0.0
        };

        let accepted = self.submissions_accepted.load(Ordering::Relaxed);
        let rejected = self.submissions_rejected.load(Ordering::Relaxed);
        let failed = self.submissions_failed.load(Ordering::Relaxed);
        let attempts = accepted + rejected + failed;
        let submission_success_rate = if attempts > 0 {
            (accepted as f64 / attempts as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            views_arabic,
            views_french,
            arabic_share,
            locale_switches: self.locale_switches(),
            submissions_accepted: accepted,
            submissions_rejected: rejected,
            submissions_failed: failed,
            submission_success_rate,
        }
    }
}

/// Snapshot of the site counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub views_arabic: usize,
    pub views_french: usize,

    /// Share of views rendered in Arabic as a percentage (0-100)
    pub arabic_share: f64,

    pub locale_switches: usize,
    pub submissions_accepted: usize,
    pub submissions_rejected: usize,
    pub submissions_failed: usize,

    /// Accepted submissions as a percentage of all attempts (0-100)
    pub submission_success_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Counter Tests ====================

    #[test]
    fn test_record_views_per_locale() {
        let metrics = SiteMetrics::new();
        metrics.record_view(Locale::Arabic);
        metrics.record_view(Locale::Arabic);
        metrics.record_view(Locale::French);

        assert_eq!(metrics.views(Locale::Arabic), 2);
        assert_eq!(metrics.views(Locale::French), 1);
    }

    #[test]
    fn test_record_locale_switch() {
        let metrics = SiteMetrics::new();
        assert_eq!(metrics.locale_switches(), 0);
        metrics.record_locale_switch();
        assert_eq!(metrics.locale_switches(), 1);
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_report_empty() {
        let report = SiteMetrics::new().report();
        assert_eq!(report.views_arabic, 0);
        assert_eq!(report.arabic_share, 0.0);
        assert_eq!(report.submission_success_rate, 0.0);
    }

    #[test]
    fn test_report_rates() {
        let metrics = SiteMetrics::new();
        for _ in 0..3 {
            metrics.record_view(Locale::Arabic);
        }
        metrics.record_view(Locale::French);
        metrics.record_submission_accepted();
        metrics.record_submission_rejected();
        metrics.record_submission_rejected();
        metrics.record_submission_failed();

        let report = metrics.report();
        assert_eq!(report.arabic_share, 75.0);
        assert_eq!(report.submissions_rejected, 2);
        assert_eq!(report.submission_success_rate, 25.0);
    }

    #[test]
    fn test_report_serializes() {
        let metrics = SiteMetrics::new();
        metrics.record_locale_switch();
        let json = serde_json::to_value(metrics.report()).unwrap();
        assert_eq!(json["locale_switches"], 1);
        assert!(json.get("submission_success_rate").is_some());
    }
}
