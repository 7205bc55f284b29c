//! Route definitions for the preview service.
//!
//! ## Routes
//!
//! - `GET /health` - Health check with catalog counts (JSON)
//! - anything else - SPA static files, with `index.html` for client routes
//!
//! Every request first goes through [`invite::invite_preview`], which answers
//! crawler requests for `/invite/...` paths with a synthesized preview page.

mod health;
pub mod invite;

use axum::Router;
use axum::middleware;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};

use crate::state::AppState;

/// Build the complete preview service router.
pub fn router(state: AppState) -> Router {
    let spa_dir = &state.config.spa_dir;
    let spa = ServeDir::new(spa_dir).fallback(ServeFile::new(spa_dir.join("index.html")));

    Router::new()
        .route("/health", get(health::health_check))
        .fallback_service(spa)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            invite::invite_preview,
        ))
        .with_state(state)
}
