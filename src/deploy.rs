//! Deploy webhook receiver.
//!
//! The content system calls this endpoint after a publish. Deliveries are
//! checked against the shared secret, logged and acknowledged; nothing is
//! triggered downstream yet.

use std::fmt;

use subtle::ConstantTimeEq;
use worker::*;

use crate::config::WorkerConfig;
use crate::models::{DeliveryHeaders, ErrorBody};

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const SECRET_HEADER: &str = "webhook-secret";

const HEALTH_BODY: &str = "Endpoint for deploy webhook";
const ACCEPTED_BODY: &str = "Accepted";
const REJECTED_MESSAGE: &str = "Webhook incorrectly configured.";
const DELIVERY_ID_HEADER: &str = "x-delivery-id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookError {
    UnsupportedContentType(Option<String>),
    SecretNotConfigured,
    SecretMismatch,
}

impl fmt::Display for WebhookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebhookError::UnsupportedContentType(Some(ct)) => {
                write!(f, "unsupported content type {ct:?}")
            }
            WebhookError::UnsupportedContentType(None) => write!(f, "missing content type"),
            WebhookError::SecretNotConfigured => {
                write!(f, "{} is not configured", crate::config::WEBHOOK_SECRET)
            }
            WebhookError::SecretMismatch => write!(f, "webhook secret mismatch"),
        }
    }
}

/// Check a delivery's content type and secret header against the
/// configured secret. Every failure is reported to the caller the same way.
pub fn verify_delivery(
    content_type: Option<&str>,
    secret: Option<&str>,
    configured: Option<&str>,
) -> std::result::Result<(), WebhookError> {
    if content_type != Some(CONTENT_TYPE_JSON) {
        return Err(WebhookError::UnsupportedContentType(
            content_type.map(ToString::to_string),
        ));
    }
    let expected = configured
        .filter(|s| !s.is_empty())
        .ok_or(WebhookError::SecretNotConfigured)?;
    match secret {
        Some(given) if secrets_match(expected, given) => Ok(()),
        _ => Err(WebhookError::SecretMismatch),
    }
}

fn secrets_match(expected: &str, actual: &str) -> bool {
    if expected.len() != actual.len() {
        return false;
    }
    expected.as_bytes().ct_eq(actual.as_bytes()).unwrap_u8() == 1
}

pub fn rejection_body() -> ErrorBody {
    ErrorBody::new(REJECTED_MESSAGE)
}

// ── Replies ─────────────────────────────────────────────────────

/// Status and body of a webhook response, before it becomes a
/// `worker::Response`.
#[derive(Debug, PartialEq)]
pub enum Reply {
    Text { status: u16, body: &'static str },
    Json { status: u16, body: ErrorBody },
}

impl Reply {
    pub fn status(&self) -> u16 {
        match self {
            Reply::Text { status, .. } | Reply::Json { status, .. } => *status,
        }
    }

    fn into_response(self) -> Result<Response> {
        match self {
            Reply::Text { status, body } => Ok(Response::ok(body)?.with_status(status)),
            Reply::Json { status, body } => Ok(Response::from_json(&body)?.with_status(status)),
        }
    }
}

/// The GET reply does not depend on the request.
pub fn health_reply() -> Reply {
    Reply::Text {
        status: 200,
        body: HEALTH_BODY,
    }
}

pub fn delivery_reply(verdict: &std::result::Result<(), WebhookError>) -> Reply {
    match verdict {
        Ok(()) => Reply::Text {
            status: 202,
            body: ACCEPTED_BODY,
        },
        Err(_) => Reply::Json {
            status: 400,
            body: rejection_body(),
        },
    }
}

// ── Handlers ────────────────────────────────────────────────────

/// `GET /api/deploy`: liveness check.
pub fn health(config: &WorkerConfig) -> Result<Response> {
    worker::console_log!(
        "deploy webhook health check (secret configured: {})",
        config.webhook_secret.is_some()
    );
    health_reply().into_response()
}

/// `POST /api/deploy`
pub async fn receive(mut req: Request, config: &WorkerConfig) -> Result<Response> {
    let headers = req.headers();
    let content_type = headers.get("content-type")?;
    let secret = headers.get(SECRET_HEADER)?;
    let delivery = DeliveryHeaders {
        webhook_id: headers.get("sanity-webhook-id")?,
        transaction_time: headers.get("sanity-transaction-time")?,
        project_id: headers.get("sanity-project-id")?,
    };

    let verdict = verify_delivery(
        content_type.as_deref(),
        secret.as_deref(),
        config.webhook_secret.as_deref(),
    );
    if let Err(err) = &verdict {
        worker::console_log!("WARN: deploy webhook rejected: {err}");
        return delivery_reply(&verdict).into_response();
    }

    let body: serde_json::Value = req.json().await?;
    let delivery_id = generate_id()?;
    worker::console_log!(
        "deploy webhook {delivery_id} accepted at {}: webhook_id={:?} transaction_time={:?} project_id={:?} document={:?}/{:?}",
        now_iso(),
        delivery.webhook_id,
        delivery.transaction_time,
        delivery.project_id,
        body.get("_type").and_then(|v| v.as_str()),
        body.get("_id").and_then(|v| v.as_str()),
    );

    let mut resp = delivery_reply(&verdict).into_response()?;
    resp.headers_mut().set(DELIVERY_ID_HEADER, &delivery_id)?;
    Ok(resp)
}

fn generate_id() -> Result<String> {
    let mut buf = [0u8; 16];
    getrandom::getrandom(&mut buf)
        .map_err(|err| Error::RustError(format!("failed to generate id: {err}")))?;
    Ok(hex::encode(buf))
}

fn now_iso() -> String {
    js_sys::Date::new_0()
        .to_iso_string()
        .as_string()
        .unwrap_or_default()
}
