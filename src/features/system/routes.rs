use axum::{routing::get, Router};

use crate::features::system::handlers::{health_check, root};

/// Create routes for the system feature
pub fn routes() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;

    #[tokio::test]
    async fn health_returns_static_payload() {
        let server = TestServer::new(routes()).unwrap();

        let res = server.get("/health").await;
        res.assert_status_ok();
        res.assert_json(&serde_json::json!({
            "status": "healthy",
            "service": "concept-atlas"
        }));
    }

    #[tokio::test]
    async fn root_reports_service_metadata() {
        let server = TestServer::new(routes()).unwrap();

        let res = server.get("/").await;
        res.assert_status_ok();
        let body: serde_json::Value = res.json();
        assert_eq!(body["message"], "Concept Atlas API");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(body["docs"], "/docs");
    }
}
