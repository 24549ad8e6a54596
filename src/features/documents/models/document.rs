use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::documents::dtos::DocumentDto;

/// Database model for a stored document
#[derive(Debug, Clone, FromRow)]
pub struct Document {
    pub id: Uuid,
    pub name: String,
    pub uri: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Document> for DocumentDto {
    fn from(d: Document) -> Self {
        Self {
            id: d.id,
            name: d.name,
            uri: d.uri,
            created_at: d.created_at,
        }
    }
}
