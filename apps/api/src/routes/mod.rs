pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::extraction::{handlers as extraction, MAX_UPLOAD_BYTES};
use crate::generation::handlers as generation;
use crate::state::AppState;

/// Room for two maximum-size uploads plus form fields, so oversized files reach
/// the per-file size check instead of being cut off by the body limit.
const BODY_LIMIT_BYTES: usize = 2 * MAX_UPLOAD_BYTES + 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/supported-formats",
            get(extraction::handle_supported_formats),
        )
        .route("/generate", post(generation::handle_generate))
        .route(
            "/upload-and-generate",
            post(generation::handle_upload_and_generate),
        )
        .route(
            "/upload-document",
            post(extraction::handle_upload_document),
        )
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .with_state(state)
}
