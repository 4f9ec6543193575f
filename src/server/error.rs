use crate::submission::SubmissionError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum SiteError {
    /// A handler asked for the locale context on a route that is not wrapped
    /// by the locale provider. This is a wiring bug, not a client error.
    #[error("locale context requested outside of the locale provider")]
    LocaleProviderMissing,

    #[error("unsupported locale: {0}")]
    UnknownLocale(String),

    #[error("form could not be delivered: {0}")]
    Submission(#[from] SubmissionError),
}

impl SiteError {
    pub fn status(&self) -> StatusCode {
        match self {
            SiteError::LocaleProviderMissing => StatusCode::INTERNAL_SERVER_ERROR,
            SiteError::UnknownLocale(_) => StatusCode::NOT_FOUND,
            SiteError::Submission(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            SiteError::LocaleProviderMissing => error!("{}", self),
            SiteError::Submission(_) => warn!("{}", self),
            SiteError::UnknownLocale(_) => {}
        }

        (
            status,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            SiteError::LocaleProviderMissing.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            SiteError::UnknownLocale("en".into()).status(),
            StatusCode::NOT_FOUND
        );
        let rejected = SubmissionError::Rejected {
            status: 500,
            body: String::new(),
        };
        assert_eq!(
            SiteError::from(rejected).status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_into_response_uses_status() {
        let response = SiteError::LocaleProviderMissing.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
