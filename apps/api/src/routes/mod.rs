pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::cv::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Documents
        .route(
            "/api/v1/cvs",
            get(handlers::handle_list).post(handlers::handle_create),
        )
        .route(
            "/api/v1/cvs/:id",
            get(handlers::handle_get)
                .put(handlers::handle_save)
                .delete(handlers::handle_delete),
        )
        .route("/api/v1/cvs/:id/duplicate", post(handlers::handle_duplicate))
        .route("/api/v1/cvs/:id/sample", post(handlers::handle_sample))
        // Layout
        .route("/api/v1/cvs/:id/layout", get(handlers::handle_layout))
        .route("/api/v1/layout", post(handlers::handle_preview_layout))
        // Export
        .route("/api/v1/cvs/:id/export", post(handlers::handle_export))
        .with_state(state)
}
