//! Crawler-aware invite preview middleware.
//!
//! Sits in front of the SPA. A request is answered here only when it comes
//! from a known link-preview fetcher AND its path is an invite link; every
//! other request continues to the next handler untouched.

use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::invite::InvitePath;
use crate::render;
use crate::resolve;
use crate::state::AppState;

/// Content type of synthesized previews.
pub const CONTENT_TYPE_HTML: &str = "text/html;charset=utf-8";

/// Previews are cacheable for one hour.
pub const CACHE_CONTROL_PREVIEW: &str = "public, max-age=3600";

/// Serve a synthesized preview to crawlers on invite paths; pass everything
/// else through.
pub async fn invite_preview(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let is_crawler = state.crawlers.is_crawler(
        request
            .headers()
            .get(header::USER_AGENT)
            .and_then(|value| value.to_str().ok()),
    );
    if !is_crawler {
        return next.run(request).await;
    }

    let Some(invite) = InvitePath::parse(request.uri().path()) else {
        tracing::debug!(path = %request.uri().path(), "crawler outside invite route, passing through");
        return next.run(request).await;
    };

    let brand = &state.config.brand;
    let meta = resolve::resolve(brand, &state.catalog, &invite);

    tracing::debug!(
        invite_code = %invite.invite_code,
        character = meta.character_name.as_deref().unwrap_or("-"),
        "serving invite preview"
    );

    build_response(render::render(brand, &meta))
}

/// Build the preview response with content, cache and security headers.
fn build_response(html: String) -> Response {
    let mut headers = HeaderMap::new();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(CONTENT_TYPE_HTML),
    );
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(CACHE_CONTROL_PREVIEW),
    );
    // Same URL, different body for browsers: shared caches must key on the agent.
    headers.insert(header::VARY, HeaderValue::from_static("user-agent"));

    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(render::components::CSP_HEADER),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );

    // ETag (xxHash of content)
    let hash = xxhash_rust::xxh3::xxh3_64(html.as_bytes());
    let etag = format!("\"{}\"", hex_fmt::HexFmt(&hash.to_be_bytes()));
    if let Ok(val) = HeaderValue::from_str(&etag) {
        headers.insert(header::ETAG, val);
    }

    (StatusCode::OK, headers, html).into_response()
}
