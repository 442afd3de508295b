// article-generation-service/src/http/mod.rs

mod handler;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::pipeline::ArticlePipeline;

/// Shared state for the axum handlers; cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ArticlePipeline>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/generate-article", post(handler::generate_article))
        .route("/health", get(handler::health))
        .with_state(state)
}
