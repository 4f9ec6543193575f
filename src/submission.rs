//! Delivery of validated form payloads.
//!
//! The default submitter only waits and logs, which is all the site has
//! ever done with a form. Setting `SUBMISSION_WEBHOOK_URL` switches to a
//! JSON POST against that endpoint.

use crate::config::Config;
use crate::forms::FormKind;
use crate::i18n::Locale;
use crate::retry::{with_retry_if, RetryConfig};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Upper bound on one webhook attempt, connect included.
pub const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("failed to reach submission endpoint: {0}")]
    Network(#[from] reqwest::Error),

    #[error("submission endpoint returned {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("failed to encode form payload: {0}")]
    Encode(#[from] serde_json::Error),
}

impl SubmissionError {
    /// Network failures and 5xx are worth another attempt; 4xx are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            SubmissionError::Network(_) => true,
            SubmissionError::Rejected { status, .. } => *status >= 500,
            SubmissionError::Encode(_) => false,
        }
    }
}

/// What the caller gets back once a form has been handed off.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReceipt {
    pub form: FormKind,
    pub locale: Locale,
    pub received_at: DateTime<Utc>,
    /// `false` for the simulated submitter, which transmits nothing
    pub delivered: bool,
}

#[derive(Debug, Serialize)]
struct WebhookPayload<'a, T: Serialize> {
    form: FormKind,
    locale: Locale,
    data: &'a T,
}

#[derive(Debug, Clone)]
pub enum Submitter {
    Simulated {
        delay: Duration,
    },
    Webhook {
        url: String,
        token: Option<String>,
        client: reqwest::Client,
        retry: RetryConfig,
    },
}

impl Submitter {
    pub fn simulated(delay: Duration) -> Self {
        Submitter::Simulated { delay }
    }

    pub fn webhook(url: impl Into<String>, token: Option<String>) -> Self {
        Submitter::Webhook {
            url: url.into(),
            token,
            client: webhook_client(WEBHOOK_TIMEOUT),
            retry: RetryConfig::webhook(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        match &config.webhook_url {
            Some(url) => Self::webhook(url.clone(), config.webhook_token.clone()),
            None => Self::simulated(config.submission_delay),
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Submitter::Simulated { .. } => "simulated",
            Submitter::Webhook { .. } => "webhook",
        }
    }

    /// Hand off a form that has already passed validation.
    ///
    /// Dropping the returned future cancels the pending delay or request.
    pub async fn submit<T: Serialize>(
        &self,
        form: FormKind,
        data: &T,
        locale: Locale,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        match self {
            Submitter::Simulated { delay } => {
                let payload = serde_json::to_string(data)?;
                tokio::time::sleep(*delay).await;
                debug!(
                    form = form.as_str(),
                    locale = %locale,
                    payload = %payload,
                    "Simulated form submission"
                );
                Ok(SubmissionReceipt {
                    form,
                    locale,
                    received_at: Utc::now(),
                    delivered: false,
                })
            }
            Submitter::Webhook {
                url,
                token,
                client,
                retry,
            } => {
                let payload = WebhookPayload { form, locale, data };
                let body = serde_json::to_vec(&payload)?;

                with_retry_if(
                    retry,
                    "Form webhook",
                    || post_once(client, url, token.as_deref(), body.clone()),
                    SubmissionError::is_retryable,
                )
                .await?;

                info!(form = form.as_str(), "Form delivered to webhook");
                Ok(SubmissionReceipt {
                    form,
                    locale,
                    received_at: Utc::now(),
                    delivered: true,
                })
            }
        }
    }
}

fn webhook_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|e| {
            warn!("Falling back to default HTTP client: {}", e);
            reqwest::Client::new()
        })
}

async fn post_once(
    client: &reqwest::Client,
    url: &str,
    token: Option<&str>,
    body: Vec<u8>,
) -> Result<(), SubmissionError> {
    let mut request = client
        .post(url)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(body);
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }

    let response = request.send().await?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        return Err(SubmissionError::Rejected { status, body });
    }

    Ok(())
}
