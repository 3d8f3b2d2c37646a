//! Application error type and its HTTP rendering

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::models::SuccessResponse;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Contact submission failed validation; the message is returned verbatim
    #[error("{0}")]
    Validation(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Request body too large")]
    PayloadTooLarge,

    /// Accepted submission could not be recorded
    #[error("Failed to record submission: {0}")]
    Sink(String),

    #[error("CORS not allowed")]
    CorsDenied { origin: String },
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::CorsDenied { .. } => StatusCode::FORBIDDEN,
            AppError::Config(_) | AppError::Sink(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = SuccessResponse {
            success: false,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
