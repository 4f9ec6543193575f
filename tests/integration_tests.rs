//! Integration tests for the Al-Karama site
//!
//! These tests start the full router on an ephemeral port and drive it over
//! HTTP, checking the locale cookie round-trip, document attributes, form
//! handling and the JSON endpoints together.

use std::time::Duration;
use wiremock::{
    matchers::{body_partial_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

use al_karama_site::config::Config;
use al_karama_site::server::{self, AppState};
use al_karama_site::submission::Submitter;

// ==================== Test Helpers ====================

fn test_config() -> Config {
    Config {
        submission_delay: Duration::ZERO,
        ..Config::default()
    }
}

async fn serve(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Server failed");
    });
    format!("http://{}", addr)
}

async fn start() -> String {
    serve(server::app(AppState::new(test_config()))).await
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to build client")
}

fn set_cookie(response: &reqwest::Response) -> Option<String> {
    response
        .headers()
        .get(reqwest::header::SET_COOKIE)
        .map(|v| v.to_str().unwrap().to_string())
}

// ==================== Locale Tests ====================

#[tokio::test]
async fn test_default_locale_is_arabic_rtl() {
    let base = start().await;
    let response = client().get(&base).send().await.unwrap();

    assert_eq!(response.status(), 200);
    assert!(set_cookie(&response).is_none());
    let html = response.text().await.unwrap();
    assert!(html.contains(r#"<html lang="ar" dir="rtl">"#));
    assert!(html.contains(r#"<body class="font-arabic">"#));
}

#[tokio::test]
async fn test_language_switch_sets_cookie_and_redirects_back() {
    let base = start().await;
    let response = client()
        .get(format!("{}/language/fr", base))
        .header("Referer", format!("{}/cinema?filter=upcoming", base))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 303);
    assert_eq!(
        response.headers()["location"].to_str().unwrap(),
        "/cinema?filter=upcoming"
    );
    let cookie = set_cookie(&response).expect("Locale cookie should be set");
    assert!(cookie.starts_with("al-karama-language=fr;"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("Max-Age=31536000"));
    assert!(cookie.contains("SameSite=Lax"));
}

#[tokio::test]
async fn test_cookie_selects_french_pages() {
    let base = start().await;
    let response = client()
        .get(format!("{}/about", base))
        .header("Cookie", "al-karama-language=fr")
        .send()
        .await
        .unwrap();

    let html = response.text().await.unwrap();
    assert!(html.contains(r#"<html lang="fr" dir="ltr">"#));
    assert!(html.contains("<body>"));
    assert!(html.contains("Mohamed Larbi"));
}

#[tokio::test]
async fn test_setting_active_locale_writes_no_cookie() {
    let base = start().await;
    let response = client()
        .get(format!("{}/language/fr", base))
        .header("Cookie", "al-karama-language=fr")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 303);
    assert!(set_cookie(&response).is_none());
}

#[tokio::test]
async fn test_corrupted_cookie_falls_back_to_arabic() {
    let base = start().await;
    let response = client()
        .get(format!("{}/theatre", base))
        .header("Cookie", "al-karama-language=klingon")
        .send()
        .await
        .unwrap();

    let html = response.text().await.unwrap();
    assert!(html.contains(r#"dir="rtl""#));
}

#[tokio::test]
async fn test_toggle_flips_locale() {
    let base = start().await;
    let response = client()
        .post(format!("{}/language/toggle", base))
        .header("Cookie", "al-karama-language=fr")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 303);
    assert_eq!(response.headers()["location"].to_str().unwrap(), "/");
    assert!(set_cookie(&response)
        .unwrap()
        .starts_with("al-karama-language=ar;"));
}

#[tokio::test]
async fn test_unknown_language_is_not_found() {
    let base = start().await;
    let response = client()
        .get(format!("{}/language/en", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_dictionary_endpoint_follows_cookie() {
    let base = start().await;
    let json: serde_json::Value = client()
        .get(format!("{}/api/dictionary", base))
        .header("Cookie", "al-karama-language=fr")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(json["nav"]["home"], "Accueil");
    assert!(json["registration"]["fullName"].is_string());
}

#[tokio::test]
async fn test_routes_without_provider_fail_with_500() {
    let base = serve(server::routes(AppState::new(test_config()))).await;

    let response = client().get(&base).send().await.unwrap();
    assert_eq!(response.status(), 500);

    // Routes that do not read the locale still work
    let health = client().get(format!("{}/health", base)).send().await.unwrap();
    assert_eq!(health.status(), 200);
}

// ==================== Form Tests ====================

#[tokio::test]
async fn test_api_contact_rejects_invalid_fields() {
    let base = start().await;
    let response = client()
        .post(format!("{}/api/contact", base))
        .json(&serde_json::json!({
            "name": "Al",
            "email": "x@y.com",
            "message": "short"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 422);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["errors"]["name"], "Name must be at least 3 characters");
    assert_eq!(
        body["errors"]["message"],
        "Message must be at least 20 characters"
    );
    assert!(body["errors"].get("email").is_none());
}

#[tokio::test]
async fn test_api_register_accepts_valid_form() {
    let base = start().await;
    let response = client()
        .post(format!("{}/api/register", base))
        .header("Cookie", "al-karama-language=fr")
        .json(&serde_json::json!({
            "fullName": "Yasmine Alaoui",
            "age": "100",
            "phone": "0612345678",
            "email": "yasmine@example.ma",
            "motivation": "J'aime le cinema marocain et les debats."
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let receipt: serde_json::Value = response.json().await.unwrap();
    assert_eq!(receipt["form"], "registration");
    assert_eq!(receipt["locale"], "fr");
    assert_eq!(receipt["delivered"], false);
}

#[tokio::test]
async fn test_html_contact_post_renders_inline_errors() {
    let base = start().await;
    let response = client()
        .post(format!("{}/contact", base))
        .form(&[("name", "Al"), ("email", "x@y.com"), ("message", "short")])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 422);
    let html = response.text().await.unwrap();
    assert!(html.contains(r#"id="contact-name-error" dir="rtl""#));
    assert!(html.contains("Message must be at least 20 characters"));
}

#[tokio::test]
async fn test_html_register_post_shows_success() {
    let base = start().await;
    let response = client()
        .post(format!("{}/register", base))
        .header("Cookie", "al-karama-language=fr")
        .form(&[
            ("fullName", "Omar Tazi"),
            ("age", "10"),
            ("phone", "0612345678"),
            ("email", "omar@example.ma"),
            ("motivation", "Le cinema est ma passion depuis toujours."),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let html = response.text().await.unwrap();
    assert!(html.contains("class=\"success\""));
    assert!(html.contains("http-equiv=\"refresh\""));
}

#[tokio::test]
async fn test_concurrent_posts_are_independent() {
    let config = Config {
        submission_delay: Duration::from_millis(200),
        ..Config::default()
    };
    let base = serve(server::app(AppState::new(config))).await;
    let body = serde_json::json!({
        "name": "Ali Ben",
        "email": "ali@example.com",
        "message": "This message is definitely long enough."
    });

    let c = client();
    let url = format!("{}/api/contact", base);
    let (first, second) = tokio::join!(
        c.post(&url).json(&body).send(),
        c.post(&url).json(&body).send()
    );

    assert_eq!(first.unwrap().status(), 200);
    assert_eq!(second.unwrap().status(), 200);
}

#[tokio::test]
async fn test_webhook_delivery_failure_is_bad_gateway() {
    let hook = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/forms"))
        .and(body_partial_json(serde_json::json!({ "form": "contact" })))
        .respond_with(ResponseTemplate::new(400))
        .expect(1)
        .mount(&hook)
        .await;

    let submitter = Submitter::webhook(format!("{}/forms", hook.uri()), None);
    let base = serve(server::app(AppState::with_submitter(test_config(), submitter))).await;

    let response = client()
        .post(format!("{}/api/contact", base))
        .json(&serde_json::json!({
            "name": "Ali Ben",
            "email": "ali@example.com",
            "message": "This message is definitely long enough."
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 502);
}

// ==================== Metrics Tests ====================

#[tokio::test]
async fn test_metrics_count_views_and_switches() {
    let base = start().await;
    let c = client();

    c.get(&base).send().await.unwrap();
    c.get(format!("{}/media", base))
        .header("Cookie", "al-karama-language=fr")
        .send()
        .await
        .unwrap();
    c.get(format!("{}/language/fr", base)).send().await.unwrap();
    c.post(format!("{}/api/contact", base))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap();

    let report: serde_json::Value = c
        .get(format!("{}/api/metrics", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(report["views_arabic"], 1);
    assert_eq!(report["views_french"], 1);
    assert_eq!(report["locale_switches"], 1);
    assert_eq!(report["submissions_rejected"], 1);
}
