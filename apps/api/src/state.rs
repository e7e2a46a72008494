use std::sync::Arc;

use crate::export::PdfExporter;
use crate::layout::PageGeometry;
use crate::storage::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL in production, in-memory when `DATABASE_URL` is unset.
    pub store: Arc<dyn DocumentStore>,
    pub exporter: Arc<dyn PdfExporter>,
    /// Page size and content budget shared by measurement and presentation.
    pub geometry: PageGeometry,
}
