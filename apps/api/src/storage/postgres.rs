use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::cv::CvDocumentRow;
use crate::models::document::ResumeDocument;
use crate::storage::DocumentStore;

/// PostgreSQL-backed store over the `cv_documents` table.
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn list(&self) -> Result<Vec<ResumeDocument>, AppError> {
        let rows: Vec<CvDocumentRow> = sqlx::query_as(
            "SELECT id, title, data, last_modified FROM cv_documents ORDER BY last_modified DESC, id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(CvDocumentRow::into_document).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<ResumeDocument>, AppError> {
        let row: Option<CvDocumentRow> = sqlx::query_as(
            "SELECT id, title, data, last_modified FROM cv_documents WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(CvDocumentRow::into_document))
    }

    async fn put(&self, document: &ResumeDocument) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO cv_documents (id, title, template_id, data, last_modified)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE
            SET title = EXCLUDED.title,
                template_id = EXCLUDED.template_id,
                data = EXCLUDED.data,
                last_modified = EXCLUDED.last_modified
            "#,
        )
        .bind(document.id)
        .bind(&document.title)
        .bind(document.template_id.as_str())
        .bind(Json(document))
        .bind(document.last_modified)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM cv_documents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
