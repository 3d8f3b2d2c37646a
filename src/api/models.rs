//! API response models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of a contact submission, also used for every error body
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}

/// Liveness response
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
            message: "Server is running".to_string(),
        }
    }
}
