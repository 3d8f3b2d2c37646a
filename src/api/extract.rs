//! Request body extraction for the contact form

use crate::contact::ContactRequest;
use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, StatusCode},
    Form,
};
use serde_json::Value;

/// Contact body accepted as JSON or URL-encoded form data.
///
/// Any other content type, an empty body, or a JSON body that is not an
/// object yields an empty request, which then fails the required-field check.
#[derive(Debug, Clone)]
pub struct ContactPayload(pub ContactRequest);

enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(request: &Request) -> BodyKind {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_ascii_lowercase());

    match content_type.as_deref() {
        Some(ct) if ct.starts_with("application/x-www-form-urlencoded") => BodyKind::Form,
        Some(ct) if ct.starts_with("application/json") => BodyKind::Json,
        Some(ct) if ct.split(';').next().map_or(false, |m| m.trim().ends_with("+json")) => {
            BodyKind::Json
        }
        _ => BodyKind::Other,
    }
}

fn body_error(status: StatusCode, text: String) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::InvalidBody(text)
    }
}

#[async_trait]
impl<S> FromRequest<S> for ContactPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(&req) {
            BodyKind::Json => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|e| body_error(e.status(), e.body_text()))?;
                if bytes.iter().all(u8::is_ascii_whitespace) {
                    return Ok(Self(ContactRequest::default()));
                }
                let body: Value = serde_json::from_slice(&bytes)
                    .map_err(|e| AppError::InvalidBody(e.to_string()))?;
                Ok(Self(ContactRequest::from_json(&body)))
            }
            BodyKind::Form => {
                let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                    .await
                    .map_err(|e| body_error(e.status(), e.body_text()))?;
                Ok(Self(ContactRequest::from_form_pairs(pairs)))
            }
            BodyKind::Other => Ok(Self(ContactRequest::default())),
        }
    }
}
