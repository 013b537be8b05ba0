//! HTTP server — serves the rendered page, its stylesheet and assets, and a
//! small JSON API.
//!
//! ## URL layout
//!
//! ```text
//! GET  /                 → rendered page (ETag / 304)
//! GET  /site.css         → stylesheet
//! GET  /api/cards        → card descriptors, carousel order
//! GET  /api/health
//! GET  /favicon.ico      → static file, or 204
//! GET  /*path            → static file, or 404
//! ```
//!
//! `run()` drives the axum event loop; the [`CancellationToken`] is wired to
//! axum's graceful shutdown.

mod api;
pub mod assets;
mod ui;

use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::cards::CardDescriptor;
use crate::config::Config;
use crate::error::AppError;
use crate::page::{Page, RenderedPage, STYLESHEET_PATH};

use assets::StaticAssets;

// ── Shared request state ──────────────────────────────────────────────────────

/// Axum router state injected into every handler via [`axum::extract::State`].
///
/// Cheap to clone — all fields are reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// The page, rendered once.
    pub page: Arc<RenderedPage>,
    /// Descriptors behind the page, for `/api/cards`.
    pub cards: Arc<[CardDescriptor]>,
    /// Optional static asset backend.
    pub assets: Option<Arc<StaticAssets>>,
}

impl AppState {
    pub fn new(page: &Page, assets: Option<StaticAssets>) -> Self {
        Self {
            page: Arc::new(RenderedPage::new(page)),
            cards: Arc::from(page.carousel().cards()),
            assets: assets.map(Arc::new),
        }
    }

    /// Compose the portfolio page and asset backend described by `config`.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let page = Page::compose(&config.site)?;
        let assets = config.site.static_dir.as_deref().and_then(StaticAssets::new);
        let state = Self::new(&page, assets);
        info!(
            cards = state.cards.len(),
            bytes = state.page.html.len(),
            etag = %state.page.etag,
            "page rendered"
        );
        Ok(state)
    }
}

// ── Router ────────────────────────────────────────────────────────────────────

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/",             get(ui::root))
        .route(STYLESHEET_PATH, get(ui::stylesheet))
        .route("/api/cards",    get(api::cards))
        .route("/api/health",   get(api::health))
        .route("/favicon.ico",  get(ui::favicon))
        .route("/{*path}",      get(ui::serve_path))
        .with_state(state)
}

// ── Server loop ───────────────────────────────────────────────────────────────

/// Bind `bind_addr` and serve until `shutdown` is cancelled.
pub async fn run(
    bind_addr: &str,
    state: AppState,
    shutdown: CancellationToken,
) -> Result<(), AppError> {
    let router = build_router(state);

    let listener = TcpListener::bind(bind_addr)
        .await
        .map_err(|e| AppError::Server(format!("bind failed on {bind_addr}: {e}")))?;

    info!(%bind_addr, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| AppError::Server(format!("server error: {e}")))?;

    info!("server shut down");
    Ok(())
}
