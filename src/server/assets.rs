//! Static asset backend — images, brand icons and the favicon, straight from disk.
//!
//! Only exact files under the root are served; there is no index fallback
//! since the site has a single page. Reads are blocking, so callers run
//! [`StaticAssets::serve`] on the blocking pool.

use std::path::{Component, Path, PathBuf};

use axum::http::StatusCode;
use tracing::{debug, info, warn};

/// Response produced by [`StaticAssets::serve`].
#[derive(Debug)]
pub struct AssetResponse {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct StaticAssets {
    root: PathBuf,
}

impl StaticAssets {
    /// `None` when `dir` is not an existing directory.
    pub fn new(dir: &Path) -> Option<Self> {
        if dir.is_dir() {
            info!(dir = %dir.display(), "assets: serving static files from disk");
            Some(Self { root: dir.to_path_buf() })
        } else {
            warn!(dir = %dir.display(), "assets: static directory missing, images will not load");
            None
        }
    }

    /// Serve the file at request `path` (e.g. `"/images/a.png"`).
    ///
    /// Returns `None` when no such file exists so the caller can answer 404.
    pub fn serve(&self, path: &str) -> Option<AssetResponse> {
        let relative = path.trim_start_matches('/');
        if relative.is_empty() {
            return None;
        }
        // Only plain segments may follow the root; `..` or an absolute
        // remainder would escape it.
        let contained = Path::new(relative)
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !contained {
            return Some(AssetResponse {
                status: StatusCode::BAD_REQUEST,
                content_type: "text/plain; charset=utf-8",
                body: b"bad request\n".to_vec(),
            });
        }
        let file_path = self.root.join(relative);
        if !file_path.is_file() {
            debug!(path, "assets: no such file");
            return None;
        }
        Some(read_static_file(&file_path))
    }
}

/// Read a file from disk with a MIME type inferred from its extension.
fn read_static_file(path: &Path) -> AssetResponse {
    match std::fs::read(path) {
        Ok(body) => AssetResponse {
            status: StatusCode::OK,
            content_type: mime_from_extension(path),
            body,
        },
        Err(e) => {
            warn!(path = %path.display(), "assets: failed to read file: {e}");
            AssetResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                content_type: "text/plain; charset=utf-8",
                body: b"internal error\n".to_vec(),
            }
        }
    }
}

/// Map a file extension to a MIME content-type string.
fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("css") => "text/css; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",
        Some("gif") => "image/gif",
        Some("ico") => "image/x-icon",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("txt") => "text/plain; charset=utf-8",
        Some("xml") => "application/xml",
        Some("json") | Some("webmanifest") => "application/json",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, StaticAssets) {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("icons")).unwrap();
        fs::write(tmp.path().join("icons/Notion_icon.svg"), "<svg/>").unwrap();
        fs::write(tmp.path().join("icons/a..b.png"), b"\x89PNG").unwrap();
        let assets = StaticAssets::new(tmp.path()).unwrap();
        (tmp, assets)
    }

    #[test]
    fn serves_existing_file_with_mime() {
        let (_tmp, assets) = fixture();
        let resp = assets.serve("/icons/Notion_icon.svg").unwrap();
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.content_type, "image/svg+xml");
        assert_eq!(resp.body, b"<svg/>");
    }

    #[test]
    fn missing_file_is_none() {
        let (_tmp, assets) = fixture();
        assert!(assets.serve("/images/nope.png").is_none());
        assert!(assets.serve("/").is_none());
        assert!(assets.serve("/icons").is_none());
    }

    #[test]
    fn traversal_is_bad_request() {
        let (_tmp, assets) = fixture();
        for path in ["/../etc/passwd", "/icons/../../secret", "/icons/.."] {
            let resp = assets.serve(path).unwrap();
            assert_eq!(resp.status, StatusCode::BAD_REQUEST, "{path}");
        }
    }

    #[test]
    fn dots_inside_a_filename_are_allowed() {
        let (_tmp, assets) = fixture();
        let resp = assets.serve("/icons/a..b.png").unwrap();
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.content_type, "image/png");
    }

    #[test]
    fn missing_dir_disables_backend() {
        assert!(StaticAssets::new(Path::new("/nonexistent/static")).is_none());
    }

    #[test]
    fn unknown_extension_is_octet_stream() {
        assert_eq!(mime_from_extension(Path::new("a.bin")), "application/octet-stream");
        assert_eq!(mime_from_extension(Path::new("a.webp")), "image/webp");
    }
}
