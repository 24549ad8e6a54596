use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Upload request DTO for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadFileDto {
    /// The file to upload
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
}

/// Metadata about an uploaded file, echoed back to the client
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FileInfoDto {
    /// Filename exactly as supplied in the multipart field
    pub filename: String,
    /// Basename of the supplied filename
    pub original_filename: String,
    /// Generated name the bytes were stored under
    pub saved_filename: String,
    /// MIME type from the multipart part, if the client sent one
    pub content_type: Option<String>,
    /// Size of the stored file in bytes
    pub size: u64,
    /// Path the bytes were written to
    pub local_path: String,
    /// Id of the metadata row
    pub database_id: String,
    /// Always "uploaded" on success
    pub status: String,
}

/// Response body for a successful upload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadResponseDto {
    pub message: String,
    pub file_info: FileInfoDto,
}

/// One document row as returned by the listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DocumentDto {
    pub id: Uuid,
    /// Original filename as supplied by the uploader
    pub name: String,
    /// Storage path of the written file
    pub uri: String,
    /// ISO-8601 creation timestamp, null if the store did not assign one
    pub created_at: Option<DateTime<Utc>>,
}

/// Response body for the listing endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DocumentListResponseDto {
    pub documents: Vec<DocumentDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_listing_serializes_to_empty_array() {
        let body = DocumentListResponseDto { documents: vec![] };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "documents": [] })
        );
    }

    #[test]
    fn missing_timestamp_serializes_as_null() {
        let doc = DocumentDto {
            id: Uuid::nil(),
            name: "a.txt".to_string(),
            uri: "data/raw/x.txt".to_string(),
            created_at: None,
        };
        let value = serde_json::to_value(&doc).unwrap();
        assert!(value["created_at"].is_null());
    }

    #[test]
    fn upload_response_carries_uploaded_status() {
        let body = UploadResponseDto {
            message: "File uploaded successfully".to_string(),
            file_info: FileInfoDto {
                filename: "a.txt".to_string(),
                original_filename: "a.txt".to_string(),
                saved_filename: "uuid.txt".to_string(),
                content_type: None,
                size: 10,
                local_path: "data/raw/uuid.txt".to_string(),
                database_id: Uuid::nil().to_string(),
                status: "uploaded".to_string(),
            },
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["file_info"]["status"], "uploaded");
        assert_eq!(value["file_info"]["size"], 10);
        assert!(value["file_info"]["content_type"].is_null());
    }
}
