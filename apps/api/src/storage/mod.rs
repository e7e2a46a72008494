//! Document persistence.
//!
//! `DocumentStore` is a plain keyed store. The lifecycle rules (validation,
//! `lastModified` stamping, new/duplicate titles) live in the free functions
//! below so both backends share them.

pub mod memory;
pub mod postgres;

use std::collections::HashSet;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::document::ResumeDocument;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

/// Largest accepted decoded photo payload.
pub const MAX_PHOTO_BYTES: usize = 500 * 1024;

const PHOTO_PREFIXES: [&str; 2] = ["data:image/png;base64,", "data:image/jpeg;base64,"];

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents, most recently modified first.
    async fn list(&self) -> Result<Vec<ResumeDocument>, AppError>;

    async fn get(&self, id: Uuid) -> Result<Option<ResumeDocument>, AppError>;

    /// Inserts or replaces the document with the same id, as given.
    async fn put(&self, document: &ResumeDocument) -> Result<(), AppError>;

    /// Returns false when no document had that id.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
}

/// Loads a document or fails with `NotFound`.
pub async fn fetch(store: &dyn DocumentStore, id: Uuid) -> Result<ResumeDocument, AppError> {
    store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("CV {id} not found")))
}

/// Validates and upserts `document`, stamping `lastModified` with the current time.
pub async fn save(
    store: &dyn DocumentStore,
    mut document: ResumeDocument,
) -> Result<ResumeDocument, AppError> {
    validate_document(&document)?;
    document.last_modified = Utc::now();
    store.put(&document).await?;
    info!(document_id = %document.id, title = %document.title, "Saved CV");
    Ok(document)
}

/// Creates and stores a blank document titled "My New CV".
pub async fn create_new(store: &dyn DocumentStore) -> Result<ResumeDocument, AppError> {
    save(store, ResumeDocument::new_blank()).await
}

/// Stores a copy of document `id` under a new id, titled `"{title} (Copy)"`.
pub async fn duplicate(store: &dyn DocumentStore, id: Uuid) -> Result<ResumeDocument, AppError> {
    let source = fetch(store, id).await?;
    save(store, source.duplicate()).await
}

/// Deletes document `id`; a missing id is `NotFound`.
pub async fn remove(store: &dyn DocumentStore, id: Uuid) -> Result<(), AppError> {
    if !store.delete(id).await? {
        return Err(AppError::NotFound(format!("CV {id} not found")));
    }
    info!(document_id = %id, "Deleted CV");
    Ok(())
}

/// Checks the invariants the editor relies on: unique item ids within each list
/// and a bounded, well-formed photo.
pub fn validate_document(document: &ResumeDocument) -> Result<(), AppError> {
    ensure_unique_ids("personalInfo.links", document.personal_info.links.iter().map(|l| l.id.as_str()))?;
    ensure_unique_ids("experience", document.experience.iter().map(|e| e.id.as_str()))?;
    ensure_unique_ids("education", document.education.iter().map(|e| e.id.as_str()))?;
    ensure_unique_ids("projects", document.projects.iter().map(|p| p.id.as_str()))?;

    if let Some(photo) = document.personal_info.photo_uri() {
        validate_photo(photo)?;
    }
    Ok(())
}

fn ensure_unique_ids<'a>(list: &str, ids: impl Iterator<Item = &'a str>) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            return Err(AppError::Validation(format!("{list}: item id must not be empty")));
        }
        if !seen.insert(id) {
            return Err(AppError::Validation(format!("{list}: duplicate item id '{id}'")));
        }
    }
    Ok(())
}

fn validate_photo(photo: &str) -> Result<(), AppError> {
    let payload = PHOTO_PREFIXES
        .iter()
        .find_map(|prefix| photo.strip_prefix(prefix))
        .ok_or_else(|| {
            AppError::Validation("photo must be a base64 PNG or JPEG data URI".to_string())
        })?;

    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| AppError::Validation(format!("photo is not valid base64: {e}")))?;

    if bytes.len() > MAX_PHOTO_BYTES {
        return Err(AppError::Validation(format!(
            "photo is {} KB; the limit is {} KB",
            bytes.len() / 1024,
            MAX_PHOTO_BYTES / 1024
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::{Experience, Project};

    fn photo_of(bytes: usize) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(vec![7u8; bytes]))
    }

    #[test]
    fn test_blank_document_is_valid() {
        assert!(validate_document(&ResumeDocument::new_blank()).is_ok());
    }

    #[test]
    fn test_duplicate_item_ids_rejected() {
        let mut doc = ResumeDocument::new_blank();
        doc.experience = vec![
            Experience { id: "x".to_string(), ..Default::default() },
            Experience { id: "x".to_string(), ..Default::default() },
        ];
        let err = validate_document(&doc).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn test_same_id_in_different_lists_is_fine() {
        let mut doc = ResumeDocument::new_blank();
        doc.experience = vec![Experience { id: "1".to_string(), ..Default::default() }];
        doc.projects = vec![Project { id: "1".to_string(), ..Default::default() }];
        assert!(validate_document(&doc).is_ok());
    }

    #[test]
    fn test_empty_item_id_rejected() {
        let mut doc = ResumeDocument::new_blank();
        doc.projects = vec![Project::default()];
        assert!(validate_document(&doc).is_err());
    }

    #[test]
    fn test_photo_limits() {
        let mut doc = ResumeDocument::new_blank();
        doc.personal_info.photo = Some(photo_of(MAX_PHOTO_BYTES));
        assert!(validate_document(&doc).is_ok());

        doc.personal_info.photo = Some(photo_of(MAX_PHOTO_BYTES + 1));
        assert!(validate_document(&doc).is_err());
    }

    #[test]
    fn test_photo_format() {
        let mut doc = ResumeDocument::new_blank();
        doc.personal_info.photo = Some("https://example.com/me.png".to_string());
        assert!(validate_document(&doc).is_err());

        doc.personal_info.photo = Some("data:image/jpeg;base64,@@@".to_string());
        assert!(validate_document(&doc).is_err());

        doc.personal_info.photo = Some("data:image/jpeg;base64,/9j/4AAQ".to_string());
        assert!(validate_document(&doc).is_ok());

        // An empty string means "no photo", as the editor writes it.
        doc.personal_info.photo = Some(String::new());
        assert!(validate_document(&doc).is_ok());
    }

    #[tokio::test]
    async fn test_lifecycle_against_memory_store() {
        let store = MemoryDocumentStore::default();

        let created = create_new(&store).await.unwrap();
        assert_eq!(created.title, "My New CV");

        let copy = duplicate(&store, created.id).await.unwrap();
        assert_eq!(copy.title, "My New CV (Copy)");
        assert_ne!(copy.id, created.id);

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, copy.id, "newest first");

        remove(&store, created.id).await.unwrap();
        assert!(matches!(remove(&store, created.id).await, Err(AppError::NotFound(_))));
        assert!(matches!(fetch(&store, created.id).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_save_stamps_last_modified() {
        let store = MemoryDocumentStore::default();
        let mut doc = ResumeDocument::new_blank();
        doc.last_modified = chrono::DateTime::<Utc>::from_timestamp(0, 0).unwrap();
        let saved = save(&store, doc).await.unwrap();
        assert!(saved.last_modified.timestamp() > 0);
    }

    #[tokio::test]
    async fn test_invalid_document_is_not_stored() {
        let store = MemoryDocumentStore::default();
        let mut doc = ResumeDocument::new_blank();
        doc.personal_info.photo = Some("not-a-data-uri".to_string());
        assert!(save(&store, doc.clone()).await.is_err());
        assert!(store.get(doc.id).await.unwrap().is_none());
    }
}
