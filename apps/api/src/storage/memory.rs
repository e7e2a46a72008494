use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::document::ResumeDocument;
use crate::storage::DocumentStore;

/// In-process store. Used when no database is configured, and in tests.
#[derive(Default)]
pub struct MemoryDocumentStore {
    documents: RwLock<HashMap<Uuid, ResumeDocument>>,
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn list(&self) -> Result<Vec<ResumeDocument>, AppError> {
        let mut documents: Vec<ResumeDocument> =
            self.documents.read().await.values().cloned().collect();
        documents.sort_by(|a, b| b.last_modified.cmp(&a.last_modified).then(a.id.cmp(&b.id)));
        Ok(documents)
    }

    async fn get(&self, id: Uuid) -> Result<Option<ResumeDocument>, AppError> {
        Ok(self.documents.read().await.get(&id).cloned())
    }

    async fn put(&self, document: &ResumeDocument) -> Result<(), AppError> {
        self.documents
            .write()
            .await
            .insert(document.id, document.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.documents.write().await.remove(&id).is_some())
    }
}
