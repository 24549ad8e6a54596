use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// JSON envelope returned for every failed request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Short description of the failure class
    pub error: String,
    /// Source error text for diagnosis
    pub details: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Write to the storage sink failed (permissions, space, interrupted stream)
    #[error("storage write failed: {0}")]
    Storage(#[source] std::io::Error),

    /// Database insert or query failed; the active transaction is rolled back
    #[error("database operation failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            AppError::Storage(ref e) => {
                tracing::error!("Storage write failed: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to write file to storage".to_string(),
                    e.to_string(),
                )
            }
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database operation failed".to_string(),
                    e.to_string(),
                )
            }
            AppError::BadRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "Bad request".to_string(), msg.clone())
            }
        };

        (status, Json(ErrorResponse { error, details })).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Router};
    use axum_test::TestServer;

    async fn storage_failure() -> Result<()> {
        Err(AppError::Storage(std::io::Error::new(
            std::io::ErrorKind::Other,
            "disk full",
        )))
    }

    async fn database_failure() -> Result<()> {
        Err(AppError::Database(sqlx::Error::PoolClosed))
    }

    #[tokio::test]
    async fn storage_error_maps_to_500_envelope() {
        let app = Router::new().route("/fail", get(storage_failure));
        let server = TestServer::new(app).unwrap();

        let res = server.get("/fail").await;
        res.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = res.json();
        assert_eq!(body["error"], "Failed to write file to storage");
        assert_eq!(body["details"], "disk full");
    }

    #[tokio::test]
    async fn database_error_maps_to_500_envelope() {
        let app = Router::new().route("/fail", get(database_failure));
        let server = TestServer::new(app).unwrap();

        let res = server.get("/fail").await;
        res.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = res.json();
        assert_eq!(body["error"], "Database operation failed");
        assert!(body["details"].is_string());
    }

    #[tokio::test]
    async fn bad_request_maps_to_400() {
        async fn missing_file() -> Result<()> {
            Err(AppError::BadRequest("File is required".to_string()))
        }

        let app = Router::new().route("/fail", get(missing_file));
        let server = TestServer::new(app).unwrap();

        let res = server.get("/fail").await;
        res.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = res.json();
        assert_eq!(body["details"], "File is required");
    }
}
