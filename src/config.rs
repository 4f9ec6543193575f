use anyhow::{Context, Result};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: IpAddr,
    pub port: u16,

    // Forms
    pub submission_delay: Duration,
    pub success_display: Duration,

    // Optional delivery endpoint for form payloads
    pub webhook_url: Option<String>,
    pub webhook_token: Option<String>,

    // Locale cookie
    pub secure_cookies: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8080,
            submission_delay: Duration::from_millis(1500),
            success_display: Duration::from_millis(3000),
            webhook_url: None,
            webhook_token: None,
            secure_cookies: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            // Server
            host: match std::env::var("HOST") {
                Ok(v) => v.parse().with_context(|| format!("HOST is not an IP address: {}", v))?,
                Err(_) => defaults.host,
            },
            port: match std::env::var("PORT") {
                Ok(v) => v.parse().with_context(|| format!("PORT is not a valid port: {}", v))?,
                Err(_) => defaults.port,
            },

            // Forms
            submission_delay: std::env::var("SUBMISSION_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.submission_delay),
            success_display: std::env::var("SUCCESS_DISPLAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.success_display),

            // Webhook
            webhook_url: non_empty_var("SUBMISSION_WEBHOOK_URL"),
            webhook_token: non_empty_var("SUBMISSION_WEBHOOK_TOKEN"),

            secure_cookies: std::env::var("SECURE_COOKIES")
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.secure_cookies),
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "HOST",
        "PORT",
        "SUBMISSION_DELAY_MS",
        "SUCCESS_DISPLAY_MS",
        "SUBMISSION_WEBHOOK_URL",
        "SUBMISSION_WEBHOOK_TOKEN",
        "SECURE_COOKIES",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    // ==================== Config Loading Tests ====================

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        clear_env();
        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.submission_delay, Duration::from_millis(1500));
        assert_eq!(config.success_display, Duration::from_millis(3000));
        assert!(config.webhook_url.is_none());
        assert!(!config.secure_cookies);
    }

    #[test]
    #[serial]
    fn test_overrides_from_env() {
        clear_env();
        std::env::set_var("PORT", "3000");
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("SUBMISSION_DELAY_MS", "0");
        std::env::set_var("SUBMISSION_WEBHOOK_URL", "https://forms.example.ma/hook");
        std::env::set_var("SECURE_COOKIES", "true");

        let config = Config::from_env().unwrap();
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.submission_delay, Duration::ZERO);
        assert_eq!(
            config.webhook_url.as_deref(),
            Some("https://forms.example.ma/hook")
        );
        assert!(config.secure_cookies);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_error() {
        clear_env();
        std::env::set_var("PORT", "eighty");
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("PORT"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_bad_numbers_fall_back_to_defaults() {
        clear_env();
        std::env::set_var("SUBMISSION_DELAY_MS", "soon");
        std::env::set_var("SUBMISSION_WEBHOOK_URL", "   ");
        let config = Config::from_env().unwrap();
        assert_eq!(config.submission_delay, Duration::from_millis(1500));
        assert!(config.webhook_url.is_none());
        clear_env();
    }
}
