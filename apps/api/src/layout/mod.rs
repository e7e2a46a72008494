//! Layout pipeline: render → measure → paginate → present.
//!
//! Every pass is a full, synchronous recompute from the document. There is no
//! incremental path and no state carried between passes. The work is CPU-bound;
//! async callers run it inside `tokio::task::spawn_blocking`.

pub mod block;
pub mod font_metrics;
pub mod geometry;
pub mod measure;
pub mod paginate;
pub mod present;
pub mod templates;

use thiserror::Error;
use tracing::info;

use crate::models::document::ResumeDocument;

pub use geometry::PageGeometry;
pub use present::{PresentMode, Presentation};

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Template markup error: {0}")]
    Markup(#[from] tera::Error),
}

/// Runs the whole pipeline for `document` using its selected template.
pub fn recompute(
    document: &ResumeDocument,
    geometry: &PageGeometry,
    mode: PresentMode,
) -> Result<Presentation, LayoutError> {
    let renderer = templates::renderer_for(document.template_id);
    let blocks = templates::render_with(renderer, document)?;

    let mut measurer = measure::Measurer::new(*geometry, renderer.sheet());
    let measured = measurer.measure(blocks);

    let pages = paginate::paginate(measured, geometry.content_height_px);
    let presentation = present::present(
        &pages,
        document.template_id,
        renderer.sheet(),
        geometry,
        mode,
    );

    info!(
        document_id = %document.id,
        template = document.template_id.as_str(),
        pages = presentation.pages.len(),
        "Layout recomputed"
    );
    Ok(presentation)
}
