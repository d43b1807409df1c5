//! Conversion and preview handlers
//!
//! `/convert` turns submitted HTML into a PDF download; `/preview` echoes
//! the submitted HTML back unmodified. Both require a non-empty
//! `html_content` form field and treat its value as opaque text.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::sync::Arc;

use crate::error::ApiError;
use crate::http::{self, form};
use crate::logger;
use crate::render::{HtmlRenderer, RenderError};

/// Download name for the rendered document
pub const DOWNLOAD_FILENAME: &str = "converted.pdf";

/// Convert submitted HTML to a PDF and return it as a file download.
///
/// One synchronous render attempt per request, no retries; the request
/// waits for the full renderer latency. The render runs on the blocking
/// pool so it cannot stall the connection reactor.
pub async fn handle_convert(
    body: &Bytes,
    renderer: Arc<dyn HtmlRenderer>,
) -> Response<Full<Bytes>> {
    let html = match require_html_content(body) {
        Ok(html) => html,
        Err(e) => return http::build_error_response(&e),
    };

    let rendered = tokio::task::spawn_blocking(move || renderer.render(&html)).await;

    match rendered {
        Ok(Ok(pdf)) => http::build_pdf_response(pdf, DOWNLOAD_FILENAME),
        Ok(Err(render_error)) => {
            let error = ApiError::from(render_error);
            logger::log_error(&error.to_string());
            http::build_error_response(&error)
        }
        Err(join_error) => {
            logger::log_error(&format!("Renderer task aborted: {join_error}"));
            let error = ApiError::Conversion(RenderError::Engine(
                "renderer task aborted".to_string(),
            ));
            http::build_error_response(&error)
        }
    }
}

/// Echo submitted HTML back for the live preview. Pass-through by design
/// contract: no transformation, no sanitization.
pub fn handle_preview(body: &Bytes) -> Response<Full<Bytes>> {
    match require_html_content(body) {
        Ok(html) => http::build_html_response(html, false),
        Err(e) => http::build_error_response(&e),
    }
}

/// Extract a non-empty `html_content` field from a form-encoded body
fn require_html_content(body: &Bytes) -> Result<String, ApiError> {
    match form::field(body, "html_content") {
        Some(html) if !html.is_empty() => Ok(html),
        _ => Err(ApiError::invalid_input("No HTML content provided")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use hyper::StatusCode;

    /// Renderer returning a fixed byte buffer
    struct FixedRenderer(Vec<u8>);

    impl HtmlRenderer for FixedRenderer {
        fn render(&self, _html: &str) -> Result<Vec<u8>, RenderError> {
            Ok(self.0.clone())
        }
    }

    /// Renderer that always fails
    struct FailingRenderer;

    impl HtmlRenderer for FailingRenderer {
        fn render(&self, _html: &str) -> Result<Vec<u8>, RenderError> {
            Err(RenderError::Engine("unsupported element".to_string()))
        }
    }

    async fn body_string(response: Response<Full<Bytes>>) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn convert_returns_pdf_attachment() {
        let renderer = Arc::new(FixedRenderer(b"%PDF-1.7 fake".to_vec()));
        let body = Bytes::from_static(b"html_content=%3Cp%3Ehi%3C%2Fp%3E");

        let response = handle_convert(&body, renderer).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("Content-Type").unwrap(),
            "application/pdf"
        );
        assert_eq!(
            response.headers().get("Content-Disposition").unwrap(),
            "attachment; filename=\"converted.pdf\""
        );
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn convert_rejects_missing_html() {
        let renderer: Arc<dyn HtmlRenderer> = Arc::new(FixedRenderer(Vec::new()));

        for body in [Bytes::new(), Bytes::from_static(b"html_content=")] {
            let response = handle_convert(&body, Arc::clone(&renderer)).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let text = body_string(response).await;
            assert!(text.contains("error"), "got: {text}");
        }
    }

    #[tokio::test]
    async fn convert_reports_renderer_failure_as_500() {
        let body = Bytes::from_static(b"html_content=%3Cp%3Ehi%3C%2Fp%3E");
        let response = handle_convert(&body, Arc::new(FailingRenderer)).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let text = body_string(response).await;
        assert!(text.contains("PDF conversion failed"), "got: {text}");
        assert!(text.contains("unsupported element"), "got: {text}");
    }

    #[tokio::test]
    async fn preview_echoes_input_exactly() {
        let body = Bytes::from_static(b"html_content=%3Ch1%3ETitle%3C%2Fh1%3E+%26+more");
        let response = handle_preview(&body);

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("Content-Type").unwrap(),
            "text/html; charset=utf-8"
        );
        assert_eq!(body_string(response).await, "<h1>Title</h1> & more");
    }

    #[tokio::test]
    async fn preview_rejects_empty_html() {
        let response = handle_preview(&Bytes::from_static(b"other_field=1"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let text = body_string(response).await;
        assert!(text.contains("No HTML content provided"), "got: {text}");
    }
}
