use utoipa::{Modify, OpenApi};

use crate::core::error::ErrorResponse;
use crate::features::documents::{dtos as documents_dtos, handlers as documents_handlers};
use crate::features::system::{dtos as system_dtos, handlers as system_handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        // System
        system_handlers::root,
        system_handlers::health_check,
        // Documents
        documents_handlers::upload_document,
        documents_handlers::list_documents,
    ),
    components(schemas(
        // System
        system_dtos::RootResponseDto,
        system_dtos::HealthResponseDto,
        // Documents
        documents_dtos::UploadFileDto,
        documents_dtos::UploadResponseDto,
        documents_dtos::FileInfoDto,
        documents_dtos::DocumentDto,
        documents_dtos::DocumentListResponseDto,
        // Errors
        ErrorResponse,
    )),
    tags(
        (name = "system", description = "Service metadata and health"),
        (name = "documents", description = "File upload and document listing")
    )
)]
pub struct ApiDoc;

/// Applies runtime-configured title/version/description to the OpenAPI document
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
