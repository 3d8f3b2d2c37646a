//! HTTP request handlers

use crate::api::extract::ContactPayload;
use crate::api::models::{HealthResponse, SuccessResponse};
use crate::contact::MSG_SENT;
use crate::error::AppError;
use crate::portfolio::Profile;
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::{debug, info};

/// Full portfolio profile
#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "Portfolio",
    responses(
        (status = 200, description = "Portfolio profile", body = Profile)
    )
)]
pub async fn get_portfolio(State(state): State<Arc<AppState>>) -> Json<Profile> {
    debug!("Serving portfolio profile");
    Json(Profile::clone(&state.profile))
}

/// Submit the contact form
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "Contact",
    request_body = crate::contact::ContactRequest,
    responses(
        (status = 200, description = "Message accepted", body = SuccessResponse),
        (status = 400, description = "Missing fields or invalid email", body = SuccessResponse),
        (status = 403, description = "Origin not allowed", body = SuccessResponse)
    )
)]
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    ContactPayload(request): ContactPayload,
) -> Result<Json<SuccessResponse>, AppError> {
    let submission = request.validate()?;

    state.contact_sink.record(&submission)?;

    info!(
        id = %submission.id,
        sink = state.contact_sink.name(),
        "Contact submission accepted"
    );

    Ok(Json(SuccessResponse {
        success: true,
        message: MSG_SENT.to_string(),
    }))
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
