use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::document::ResumeDocument;

/// A row of `cv_documents`. The full document lives in `data`; `title` and
/// `last_modified` are mirrored into columns for listing.
#[derive(Debug, Clone, FromRow)]
pub struct CvDocumentRow {
    pub id: Uuid,
    pub title: String,
    pub data: Json<ResumeDocument>,
    pub last_modified: DateTime<Utc>,
}

impl CvDocumentRow {
    /// The stored document, with the columns taking precedence over the JSON copy.
    pub fn into_document(self) -> ResumeDocument {
        let Json(mut document) = self.data;
        document.id = self.id;
        document.title = self.title;
        document.last_modified = self.last_modified;
        document
    }
}
