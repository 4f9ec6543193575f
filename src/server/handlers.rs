use super::{AppState, RequestLocale, SiteError};
use crate::content::cinema::ScreeningFilter;
use crate::content::media::GalleryFilter;
use crate::forms::{
    ContactForm, FormController, RegistrationForm, SubmitError, Validate, ValidationErrors,
};
use crate::i18n::{Dictionary, Locale};
use crate::metrics::MetricsReport;
use crate::pages::{self, ContactPage, Page};
use crate::submission::SubmissionReceipt;
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

fn page(state: &AppState, locale: &RequestLocale, path: &'static str) -> Page {
    let current = locale.locale();
    state.metrics.record_view(current);
    Page::new(current, locale.document(), path)
}

// ==================== Pages ====================

pub async fn home(State(state): State<AppState>, locale: RequestLocale) -> Html<String> {
    Html(pages::home(&page(&state, &locale, "/")))
}

pub async fn about(State(state): State<AppState>, locale: RequestLocale) -> Html<String> {
    Html(pages::about(&page(&state, &locale, "/about")))
}

#[derive(Debug, Deserialize)]
pub struct CinemaQuery {
    filter: Option<String>,
}

pub async fn cinema(
    State(state): State<AppState>,
    locale: RequestLocale,
    Query(query): Query<CinemaQuery>,
) -> Html<String> {
    let filter = ScreeningFilter::from_query(query.filter.as_deref());
    Html(pages::cinema(&page(&state, &locale, "/cinema"), filter))
}

pub async fn theatre(State(state): State<AppState>, locale: RequestLocale) -> Html<String> {
    Html(pages::theatre(&page(&state, &locale, "/theatre")))
}

#[derive(Debug, Deserialize)]
pub struct MediaQuery {
    category: Option<String>,
}

pub async fn media(
    State(state): State<AppState>,
    locale: RequestLocale,
    Query(query): Query<MediaQuery>,
) -> Html<String> {
    let filter = GalleryFilter::from_query(query.category.as_deref());
    Html(pages::media(&page(&state, &locale, "/media"), filter))
}

pub async fn partners(State(state): State<AppState>, locale: RequestLocale) -> Html<String> {
    Html(pages::partners(&page(&state, &locale, "/partners")))
}

pub async fn school_clubs(State(state): State<AppState>, locale: RequestLocale) -> Html<String> {
    Html(pages::school_clubs(&page(&state, &locale, "/school-clubs")))
}

pub async fn contact_page(State(state): State<AppState>, locale: RequestLocale) -> Html<String> {
    let display = state.config.success_display;
    let contact = FormController::new(display);
    let registration = FormController::new(display);
    Html(pages::contact(
        &page(&state, &locale, "/contact"),
        &ContactPage {
            contact: &contact,
            registration: &registration,
        },
    ))
}

// ==================== Form Posts ====================

enum Outcome {
    Accepted(SubmissionReceipt),
    Rejected(ValidationErrors),
}

impl Outcome {
    fn status(&self) -> StatusCode {
        match self {
            Outcome::Accepted(_) => StatusCode::OK,
            Outcome::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

async fn run_submission<F>(
    state: &AppState,
    controller: &mut FormController<F>,
    locale: Locale,
) -> Result<Outcome, SiteError>
where
    F: Validate + Serialize + Default + Clone,
{
    match controller.submit(&state.submitter, locale).await {
        Ok(receipt) => {
            state.metrics.record_submission_accepted();
            Ok(Outcome::Accepted(receipt))
        }
        Err(SubmitError::Invalid(errors)) => {
            state.metrics.record_submission_rejected();
            info!(
                form = F::KIND.as_str(),
                fields = ?errors.fields(),
                "Form rejected by validation"
            );
            Ok(Outcome::Rejected(errors))
        }
        Err(SubmitError::Delivery(e)) => {
            state.metrics.record_submission_failed();
            Err(e.into())
        }
    }
}

pub async fn contact_post(
    State(state): State<AppState>,
    locale: RequestLocale,
    Form(form): Form<ContactForm>,
) -> Result<Response, SiteError> {
    let display = state.config.success_display;
    let mut contact = FormController::with_form(form, display);
    let outcome = run_submission(&state, &mut contact, locale.locale()).await?;

    let registration = FormController::new(display);
    let html = pages::contact(
        &page(&state, &locale, "/contact"),
        &ContactPage {
            contact: &contact,
            registration: &registration,
        },
    );
    Ok((outcome.status(), Html(html)).into_response())
}

pub async fn register_post(
    State(state): State<AppState>,
    locale: RequestLocale,
    Form(form): Form<RegistrationForm>,
) -> Result<Response, SiteError> {
    let display = state.config.success_display;
    let mut registration = FormController::with_form(form, display);
    let outcome = run_submission(&state, &mut registration, locale.locale()).await?;

    let contact = FormController::new(display);
    let html = pages::contact(
        &page(&state, &locale, "/contact"),
        &ContactPage {
            contact: &contact,
            registration: &registration,
        },
    );
    Ok((outcome.status(), Html(html)).into_response())
}

async fn api_submit<F>(state: &AppState, locale: Locale, form: F) -> Result<Response, SiteError>
where
    F: Validate + Serialize + Default + Clone,
{
    let mut controller = FormController::with_form(form, state.config.success_display);
    let outcome = run_submission(state, &mut controller, locale).await?;
    let status = outcome.status();

    Ok(match outcome {
        Outcome::Accepted(receipt) => (status, Json(receipt)).into_response(),
        Outcome::Rejected(errors) => {
            (status, Json(serde_json::json!({ "errors": errors }))).into_response()
        }
    })
}

pub async fn api_contact(
    State(state): State<AppState>,
    locale: RequestLocale,
    Json(form): Json<ContactForm>,
) -> Result<Response, SiteError> {
    api_submit(&state, locale.locale(), form).await
}

pub async fn api_register(
    State(state): State<AppState>,
    locale: RequestLocale,
    Json(form): Json<RegistrationForm>,
) -> Result<Response, SiteError> {
    api_submit(&state, locale.locale(), form).await
}

// ==================== Locale Switching ====================

/// Same-site path to return to after a locale switch.
fn back_to(headers: &HeaderMap) -> String {
    headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<Uri>().ok())
        .and_then(|uri| uri.path_and_query().map(|pq| pq.as_str().to_string()))
        .filter(|p| is_local_path(p) && !p.starts_with("/language/"))
        .unwrap_or_else(|| "/".to_string())
}

/// A path browsers cannot read as protocol-relative. `\` counts as `/` in
/// http(s) URLs, so it is refused anywhere, encoded or not.
fn is_local_path(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    path.starts_with('/')
        && !path.starts_with("//")
        && !path.contains('\\')
        && !lower.contains("%5c")
        && !lower.starts_with("/%2f")
}

pub async fn set_language(
    State(state): State<AppState>,
    locale: RequestLocale,
    Path(code): Path<String>,
    headers: HeaderMap,
) -> Result<Redirect, SiteError> {
    let target = Locale::from_code(&code).map_err(|_| SiteError::UnknownLocale(code))?;
    if locale.set_locale(target) {
        state.metrics.record_locale_switch();
        info!(locale = %target, "Locale switched");
    }
    Ok(Redirect::to(&back_to(&headers)))
}

pub async fn toggle_language(
    State(state): State<AppState>,
    locale: RequestLocale,
    headers: HeaderMap,
) -> Redirect {
    let next = locale.toggle();
    state.metrics.record_locale_switch();
    info!(locale = %next, "Locale toggled");
    Redirect::to(&back_to(&headers))
}

// ==================== JSON Endpoints ====================

pub async fn dictionary(locale: RequestLocale) -> Json<&'static Dictionary> {
    Json(locale.dictionary())
}

pub async fn metrics(State(state): State<AppState>) -> Json<MetricsReport> {
    Json(state.metrics.report())
}

pub async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn referer(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::REFERER, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_back_to_uses_referer_path() {
        assert_eq!(
            back_to(&referer("http://localhost:8080/cinema?filter=upcoming")),
            "/cinema?filter=upcoming"
        );
        assert_eq!(back_to(&referer("/media")), "/media");
    }

    #[test]
    fn test_back_to_defaults_to_root() {
        assert_eq!(back_to(&HeaderMap::new()), "/");
        assert_eq!(back_to(&referer("http://localhost/language/fr")), "/");
        assert_eq!(back_to(&referer("not a uri at all")), "/");
    }

    #[test]
    fn test_back_to_refuses_protocol_relative_paths() {
        for hostile in [
            "https://evil.example//evil.example/x",
            "https://evil.example/\\evil.example/x",
            "/\\evil.example",
            "/%5Cevil.example",
            "/%2F/evil.example",
            "/cinema\\..\\evil",
        ] {
            assert_eq!(back_to(&referer(hostile)), "/", "accepted {:?}", hostile);
        }
        assert_eq!(back_to(&referer("/partners?x=1")), "/partners?x=1");
    }
}
