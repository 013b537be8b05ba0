//! Integration tests for the HTTP surface.
//!
//! Run with:
//!   cargo test --test test_site

use std::fs;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use tempfile::TempDir;
use tower::ServiceExt;

use portfolio_site::config::SiteConfig;
use portfolio_site::page::Page;
use portfolio_site::server::assets::StaticAssets;
use portfolio_site::server::{AppState, build_router};

// ── helpers ──────────────────────────────────────────────────────────────────

fn app(assets: Option<StaticAssets>) -> Router {
    let page = Page::compose(&SiteConfig::local()).expect("compose page");
    build_router(AppState::new(&page, assets))
}

fn static_dir() -> TempDir {
    let tmp = TempDir::new().expect("tempdir");
    fs::create_dir_all(tmp.path().join("images")).unwrap();
    fs::write(tmp.path().join("images/Lume_card_image.png"), b"\x89PNG").unwrap();
    fs::write(tmp.path().join("favicon.ico"), b"ico").unwrap();
    tmp
}

async fn get(app: Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_string(resp: axum::response::Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// ── page ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn root_serves_page_with_etag() {
    let resp = get(app(None), "/").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "text/html; charset=utf-8");
    assert!(resp.headers().contains_key(header::ETAG));

    let body = body_string(resp).await;
    assert!(body.contains("Design should be built"));
    assert!(body.contains(r#"aria-label="Projects carousel""#));
    assert!(body.contains(r#"data-initial-scroll="186""#));
}

#[tokio::test]
async fn matching_etag_is_not_modified() {
    let router = app(None);
    let first = get(router.clone(), "/").await;
    let etag = first.headers()[header::ETAG].to_str().unwrap().to_string();

    let resp = router
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::IF_NONE_MATCH, &etag)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);
    assert_eq!(resp.headers()[header::ETAG], etag.as_str());
    assert!(body_string(resp).await.is_empty());
}

#[tokio::test]
async fn stylesheet_is_served() {
    let resp = get(app(None), "/site.css").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "text/css; charset=utf-8");
    let css = body_string(resp).await;
    assert!(css.contains("scroll-snap-type: x proximity"));
    assert!(css.contains("scrollbar-width: none"));
}

// ── api ──────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn cards_api_lists_descriptors_in_order() {
    let resp = get(app(None), "/api/cards").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    let ids: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, ["p1", "me", "p2", "p3", "art"]);
    assert_eq!(json[0]["imageSrc"], "/images/Lume_card_image.png");
    assert_eq!(json[2]["links"]["exploreIcon"], "v0");
}

#[tokio::test]
async fn health_reports_card_count() {
    let resp = get(app(None), "/api/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["cards"], 5);
}

// ── assets ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn static_image_is_served() {
    let dir = static_dir();
    let resp = get(app(StaticAssets::new(dir.path())), "/images/Lume_card_image.png").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "image/png");
}

#[tokio::test]
async fn favicon_from_disk_or_no_content() {
    let dir = static_dir();
    let resp = get(app(StaticAssets::new(dir.path())), "/favicon.ico").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "ico");

    let resp = get(app(None), "/favicon.ico").await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    let dir = static_dir();
    let resp = get(app(StaticAssets::new(dir.path())), "/images/missing.png").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = get(app(None), "/about").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn traversal_is_rejected() {
    let dir = static_dir();
    let resp = get(app(StaticAssets::new(dir.path())), "/images/../../secret").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn double_dot_filenames_are_served() {
    let dir = static_dir();
    fs::write(dir.path().join("images/v1..v2.png"), b"\x89PNG").unwrap();
    let resp = get(app(StaticAssets::new(dir.path())), "/images/v1..v2.png").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "image/png");
}
