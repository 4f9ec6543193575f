//! Request-scoped locale provider.
//!
//! The middleware builds a `LocaleContext` from the request cookies, makes it
//! available to the handler, then turns any preference write into a
//! `Set-Cookie` header on the way out.

use super::{AppState, SiteError};
use crate::i18n::{Dictionary, DocumentAttributes, Locale, LocaleContext};
use crate::server::cookies::CookieStore;
use axum::async_trait;
use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Handle on the locale context of the current request.
#[derive(Debug, Clone)]
pub struct RequestLocale(Arc<Mutex<LocaleContext<CookieStore>>>);

impl RequestLocale {
    pub fn new(context: LocaleContext<CookieStore>) -> Self {
        Self(Arc::new(Mutex::new(context)))
    }

    fn lock(&self) -> MutexGuard<'_, LocaleContext<CookieStore>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn locale(&self) -> Locale {
        self.lock().locale()
    }

    pub fn dictionary(&self) -> &'static Dictionary {
        self.lock().dictionary()
    }

    pub fn document(&self) -> DocumentAttributes {
        self.lock().document()
    }

    /// Returns whether the locale actually changed.
    pub fn set_locale(&self, locale: Locale) -> bool {
        self.lock().set_locale(locale)
    }

    pub fn toggle(&self) -> Locale {
        self.lock().toggle()
    }

    fn apply_cookies(&self, response: &mut Response) {
        self.lock().store().apply(response.headers_mut());
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for RequestLocale {
    type Rejection = SiteError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestLocale>()
            .cloned()
            .ok_or(SiteError::LocaleProviderMissing)
    }
}

pub async fn provide_locale(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let store = CookieStore::from_headers(request.headers(), state.config.secure_cookies);
    let locale = RequestLocale::new(LocaleContext::initialize(store));
    request.extensions_mut().insert(locale.clone());

    let mut response = next.run(request).await;
    locale.apply_cookies(&mut response);
    response
}
