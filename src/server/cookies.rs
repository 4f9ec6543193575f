//! Cookie-backed preference store.
//!
//! Reads come from the request's `Cookie` header; a write is queued and
//! turned into a `Set-Cookie` header once the handler has finished.

use crate::i18n::{PreferenceStore, StorageError};
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use tracing::warn;

/// One year, in seconds.
pub const COOKIE_MAX_AGE: u64 = 365 * 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct CookieStore {
    /// `name=value` pairs from the request; `None` if the header was not text
    cookies: Option<Vec<(String, String)>>,
    pending: Vec<(String, String)>,
    secure: bool,
}

impl Default for CookieStore {
    fn default() -> Self {
        Self {
            cookies: Some(Vec::new()),
            pending: Vec::new(),
            secure: false,
        }
    }
}

impl CookieStore {
    pub fn from_headers(headers: &HeaderMap, secure: bool) -> Self {
        let mut cookies = Vec::new();
        let mut readable = true;
        for value in headers.get_all(COOKIE) {
            match value.to_str() {
                Ok(raw) => cookies.extend(parse_cookie_header(raw)),
                Err(_) => readable = false,
            }
        }
        Self {
            cookies: readable.then_some(cookies),
            pending: Vec::new(),
            secure,
        }
    }

    /// `Set-Cookie` values for every write made during the request.
    pub fn set_cookie_headers(&self) -> Vec<HeaderValue> {
        self.pending
            .iter()
            .filter_map(|(name, value)| {
                let mut cookie = format!(
                    "{}={}; Path=/; Max-Age={}; SameSite=Lax",
                    name, value, COOKIE_MAX_AGE
                );
                if self.secure {
                    cookie.push_str("; Secure");
                }
                match HeaderValue::from_str(&cookie) {
                    Ok(v) => Some(v),
                    Err(e) => {
                        warn!("Dropping unencodable cookie {}: {}", name, e);
                        None
                    }
                }
            })
            .collect()
    }

    /// Append the queued cookies to a response's headers.
    pub fn apply(&self, headers: &mut HeaderMap) {
        for value in self.set_cookie_headers() {
            headers.append(SET_COOKIE, value);
        }
    }
}

impl PreferenceStore for CookieStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let cookies = self
            .cookies
            .as_ref()
            .ok_or_else(|| StorageError::Unreadable("Cookie header is not ASCII".to_string()))?;

        // A write earlier in the same request wins over the incoming header
        if let Some((_, value)) = self.pending.iter().rev().find(|(name, _)| name == key) {
            return Ok(Some(value.clone()));
        }

        Ok(cookies
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.clone()))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if !is_cookie_token(value) {
            return Err(StorageError::Unavailable(format!(
                "value not storable in a cookie: {:?}",
                value
            )));
        }
        self.pending.retain(|(name, _)| name != key);
        self.pending.push((key.to_string(), value.to_string()));
        Ok(())
    }
}

fn parse_cookie_header(raw: &str) -> impl Iterator<Item = (String, String)> + '_ {
    raw.split(';').filter_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        let value = value.trim().trim_matches('"');
        Some((name.trim().to_string(), value.to_string()))
    })
}

fn is_cookie_token(value: &str) -> bool {
    !value.is_empty()
        && value
            .bytes()
            .all(|b| b.is_ascii_graphic() && !matches!(b, b';' | b',' | b'"' | b'\\'))
}
