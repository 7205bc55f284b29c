//! Liveness endpoint with catalog counts.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    /// Characters the preview catalog can resolve.
    characters: usize,
    crawler_signatures: usize,
}

/// `GET /health`. Reports the loaded catalog and crawler list sizes.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "oga-preview",
        version: env!("CARGO_PKG_VERSION"),
        characters: state.catalog.len(),
        crawler_signatures: state.crawlers.len(),
    })
}
