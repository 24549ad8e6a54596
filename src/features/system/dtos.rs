use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response body for the API root
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponseDto {
    pub message: String,
    pub version: String,
    /// Path of the interactive API documentation
    pub docs: String,
}

/// Response body for the health endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponseDto {
    pub status: String,
    pub service: String,
}
