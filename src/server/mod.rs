//! HTTP surface of the site.

pub mod cookies;
mod error;
mod handlers;
mod locale;

pub use error::SiteError;
pub use locale::{provide_locale, RequestLocale};

use crate::config::Config;
use crate::metrics::SiteMetrics;
use crate::submission::Submitter;
use axum::routing::{get, post};
use axum::{middleware, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub submitter: Arc<Submitter>,
    pub metrics: Arc<SiteMetrics>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let submitter = Submitter::from_config(&config);
        Self::with_submitter(config, submitter)
    }

    pub fn with_submitter(config: Config, submitter: Submitter) -> Self {
        Self {
            config: Arc::new(config),
            submitter: Arc::new(submitter),
            metrics: Arc::new(SiteMetrics::new()),
        }
    }
}

/// Route table without the locale provider. Locale-dependent routes answer
/// 500 when served from here; use [`app`] to get a working site.
pub fn routes(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(handlers::home))
        .route("/about", get(handlers::about))
        .route("/cinema", get(handlers::cinema))
        .route("/theatre", get(handlers::theatre))
        .route("/media", get(handlers::media))
        .route("/partners", get(handlers::partners))
        .route("/school-clubs", get(handlers::school_clubs))
        .route("/contact", get(handlers::contact_page).post(handlers::contact_post))
        .route("/register", post(handlers::register_post))
        // Locale switching
        .route("/language/toggle", post(handlers::toggle_language))
        .route("/language/:code", get(handlers::set_language))
        // JSON API
        .route("/api/contact", post(handlers::api_contact))
        .route("/api/register", post(handlers::api_register))
        .route("/api/dictionary", get(handlers::dictionary))
        .route("/api/metrics", get(handlers::metrics))
        .route("/health", get(handlers::health))
        .with_state(state)
}

/// The full site: routes wrapped in the locale provider and request tracing.
pub fn app(state: AppState) -> Router {
    routes(state.clone())
        .layer(middleware::from_fn_with_state(state, provide_locale))
        .layer(TraceLayer::new_for_http())
}
