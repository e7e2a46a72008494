use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::cv::sample::{apply_sample, SampleLocale};
use crate::errors::AppError;
use crate::export::{content_disposition, export_filename};
use crate::layout::{recompute, PageGeometry, PresentMode, Presentation};
use crate::models::document::ResumeDocument;
use crate::state::AppState;
use crate::storage;

#[derive(Debug, Default, Deserialize)]
pub struct LayoutQuery {
    #[serde(default)]
    pub mode: PresentMode,
}

#[derive(Debug, Deserialize)]
pub struct SampleRequest {
    pub locale: SampleLocale,
}

/// Runs the layout pipeline off the async executor.
async fn lay_out(
    document: ResumeDocument,
    geometry: PageGeometry,
    mode: PresentMode,
) -> Result<Presentation, AppError> {
    let presentation = tokio::task::spawn_blocking(move || recompute(&document, &geometry, mode))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Layout task failed: {e}")))??;
    Ok(presentation)
}

/// GET /api/v1/cvs
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResumeDocument>>, AppError> {
    Ok(Json(state.store.list().await?))
}

/// POST /api/v1/cvs
pub async fn handle_create(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ResumeDocument>), AppError> {
    let document = storage::create_new(state.store.as_ref()).await?;
    Ok((StatusCode::CREATED, Json(document)))
}

/// GET /api/v1/cvs/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeDocument>, AppError> {
    Ok(Json(storage::fetch(state.store.as_ref(), id).await?))
}

/// PUT /api/v1/cvs/:id
pub async fn handle_save(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(mut document): Json<ResumeDocument>,
) -> Result<Json<ResumeDocument>, AppError> {
    // The path is authoritative for identity.
    document.id = id;
    Ok(Json(storage::save(state.store.as_ref(), document).await?))
}

/// DELETE /api/v1/cvs/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    storage::remove(state.store.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/cvs/:id/duplicate
pub async fn handle_duplicate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<ResumeDocument>), AppError> {
    let copy = storage::duplicate(state.store.as_ref(), id).await?;
    Ok((StatusCode::CREATED, Json(copy)))
}

/// POST /api/v1/cvs/:id/sample
pub async fn handle_sample(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SampleRequest>,
) -> Result<Json<ResumeDocument>, AppError> {
    let document = storage::fetch(state.store.as_ref(), id).await?;
    let filled = apply_sample(&document, req.locale);
    Ok(Json(storage::save(state.store.as_ref(), filled).await?))
}

/// GET /api/v1/cvs/:id/layout
pub async fn handle_layout(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<LayoutQuery>,
) -> Result<Json<Presentation>, AppError> {
    let document = storage::fetch(state.store.as_ref(), id).await?;
    Ok(Json(lay_out(document, state.geometry, query.mode).await?))
}

/// POST /api/v1/layout
/// Lays out an unsaved document, for live preview while editing.
/// Held to the same rules as a save so block keys stay unique.
pub async fn handle_preview_layout(
    State(state): State<AppState>,
    Query(query): Query<LayoutQuery>,
    Json(document): Json<ResumeDocument>,
) -> Result<Json<Presentation>, AppError> {
    storage::validate_document(&document)?;
    Ok(Json(lay_out(document, state.geometry, query.mode).await?))
}

/// POST /api/v1/cvs/:id/export
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let document = storage::fetch(state.store.as_ref(), id).await?;
    let filename = export_filename(&document.title);
    let title = document.title.clone();

    let presentation = lay_out(document, state.geometry, PresentMode::Print).await?;
    let html = presentation.to_document(&title);
    let pdf = state.exporter.export(id, &filename, html).await?;

    info!(
        document_id = %id,
        pages = presentation.pages.len(),
        filename = %filename,
        "Exported CV"
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, content_disposition(&filename)),
        ],
        pdf,
    ))
}
