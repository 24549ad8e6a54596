use axum::Json;

use crate::features::system::dtos::{HealthResponseDto, RootResponseDto};

pub const SERVICE_NAME: &str = "concept-atlas";

/// Service metadata
#[utoipa::path(
    get,
    path = "/",
    tag = "system",
    responses(
        (status = 200, description = "Service name, version and docs path", body = RootResponseDto)
    )
)]
pub async fn root() -> Json<RootResponseDto> {
    Json(RootResponseDto {
        message: "Concept Atlas API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        docs: "/docs".to_string(),
    })
}

/// Health check
///
/// Static liveness payload; does not probe the storage sink or the database.
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Service is up", body = HealthResponseDto)
    )
)]
pub async fn health_check() -> Json<HealthResponseDto> {
    Json(HealthResponseDto {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}
