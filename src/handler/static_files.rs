//! Index page and static asset serving
//!
//! The editor frontend lives on disk under the configured static directory;
//! the index page falls back to a built-in placeholder when the file is
//! missing so the server stays usable via the JSON API.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

use crate::config::ResourcesConfig;
use crate::http::{self, mime};
use crate::logger;

const FALLBACK_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>HTML to PDF Converter</title></head>
<body>
<h1>HTML to PDF Converter</h1>
<p>POST form-encoded html_content to /convert to receive a PDF.</p>
</body>
</html>"#;

/// Serve the editor page at `/`
pub async fn serve_index(resources: &ResourcesConfig, is_head: bool) -> Response<Full<Bytes>> {
    match fs::read_to_string(&resources.index_file).await {
        Ok(html) => http::build_html_response(html, is_head),
        Err(_) => {
            logger::log_warning(&format!(
                "Failed to load {}, serving fallback page",
                resources.index_file
            ));
            http::build_html_response(FALLBACK_PAGE.to_string(), is_head)
        }
    }
}

/// Serve a frontend asset under `/static/`
pub async fn serve_asset(
    resources: &ResourcesConfig,
    path: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    match load_asset(&resources.static_dir, path).await {
        Some((content, content_type)) => http::build_asset_response(content, content_type, is_head),
        None => http::build_404_response(),
    }
}

async fn load_asset(static_dir: &str, path: &str) -> Option<(Vec<u8>, &'static str)> {
    let relative = path.strip_prefix("/static/")?;

    // Drop traversal sequences before joining
    let clean = relative.replace("..", "");
    let file_path = Path::new(static_dir).join(clean.trim_start_matches('/'));

    // Containment check: the resolved file must stay inside static_dir
    let dir_canonical = Path::new(static_dir).canonicalize().ok()?;
    let file_canonical = file_path.canonicalize().ok()?;
    if !file_canonical.starts_with(&dir_canonical) {
        return None;
    }

    let content = fs::read(&file_canonical).await.ok()?;
    let content_type = mime::get_content_type(
        file_canonical.extension().and_then(|e| e.to_str()),
    );
    Some((content, content_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_shipped_frontend_script() {
        let (content, content_type) = load_asset("static", "/static/js/app.js")
            .await
            .expect("shipped asset should load");
        assert!(!content.is_empty());
        assert_eq!(content_type, "application/javascript");
    }

    #[tokio::test]
    async fn rejects_traversal() {
        assert!(load_asset("static", "/static/../Cargo.toml").await.is_none());
        assert!(load_asset("static", "/static/%2e%2e/Cargo.toml").await.is_none());
    }

    #[tokio::test]
    async fn missing_asset_is_none() {
        assert!(load_asset("static", "/static/nope.css").await.is_none());
    }
}
