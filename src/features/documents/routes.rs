use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::features::documents::handlers::{list_documents, upload_document};
use crate::features::documents::services::DocumentService;

/// Create routes for the documents feature
pub fn routes(service: Arc<DocumentService>, max_upload_size: usize) -> Router {
    Router::new()
        .route(
            "/upload",
            // Allow body size up to the configured limit plus multipart overhead
            post(upload_document).layer(DefaultBodyLimit::max(max_upload_size + 1024 * 1024)),
        )
        .route("/documents", get(list_documents))
        .with_state(service)
}
