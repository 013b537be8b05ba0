//! Page and asset route handlers.
//!
//! The page is served from the copy rendered at startup. Static files go
//! through [`StaticAssets::serve`] on [`tokio::task::spawn_blocking`] because
//! it reads from disk.
//!
//! [`StaticAssets::serve`]: super::assets::StaticAssets::serve

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Response, StatusCode, Uri, header},
    response::IntoResponse,
};
use tracing::warn;

use crate::page::STYLESHEET;

use super::AppState;

// ── Handlers ──────────────────────────────────────────────────────────────────

/// GET / — the portfolio page, revalidated by ETag.
pub(super) async fn root(State(state): State<AppState>, headers: HeaderMap) -> axum::response::Response {
    let page = &state.page;
    let not_modified = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| page.matches(v));

    if not_modified {
        return (StatusCode::NOT_MODIFIED, [(header::ETAG, page.etag.clone())]).into_response();
    }

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (header::ETAG, page.etag.clone()),
            (header::CACHE_CONTROL, "no-cache".to_string()),
        ],
        page.html.clone(),
    )
        .into_response()
}

/// GET /site.css
pub(super) async fn stylesheet() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        STYLESHEET,
    )
}

/// GET /favicon.ico — from the static dir when present, otherwise 204.
pub(super) async fn favicon(State(state): State<AppState>) -> axum::response::Response {
    match serve_asset(&state, "/favicon.ico").await {
        Some(resp) => resp,
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// GET /*path — static asset or 404.
pub(super) async fn serve_path(State(state): State<AppState>, uri: Uri) -> axum::response::Response {
    match serve_asset(&state, uri.path()).await {
        Some(resp) => resp,
        None => (StatusCode::NOT_FOUND, "not found\n").into_response(),
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

async fn serve_asset(state: &AppState, path: &str) -> Option<axum::response::Response> {
    let assets = state.assets.clone()?;
    let owned = path.to_string();
    // StaticAssets::serve does blocking file I/O — run it off the async executor.
    match tokio::task::spawn_blocking(move || assets.serve(&owned)).await {
        Ok(Some(resp)) => Some(
            Response::builder()
                .status(resp.status)
                .header(header::CONTENT_TYPE, resp.content_type)
                .body(Body::from(resp.body))
                .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response()),
        ),
        Ok(None) => None,
        Err(e) => {
            warn!(path, "asset task failed: {e}");
            Some(StatusCode::INTERNAL_SERVER_ERROR.into_response())
        }
    }
}
