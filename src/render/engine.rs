// printpdf-backed rendering engine

use std::collections::BTreeMap;

use printpdf::{GeneratePdfOptions, PdfDocument, PdfSaveOptions};

use super::{HtmlRenderer, RenderError};
use crate::logger;

/// Production renderer built on printpdf's HTML pipeline.
///
/// Stateless: each call lays out the document from scratch. No images or
/// extra fonts are pre-registered; documents reference built-in fonts only.
pub struct PrintPdfRenderer;

impl PrintPdfRenderer {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for PrintPdfRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlRenderer for PrintPdfRenderer {
    fn render(&self, html: &str) -> Result<Vec<u8>, RenderError> {
        let images = BTreeMap::new();
        let fonts = BTreeMap::new();
        let options = GeneratePdfOptions::default();
        let mut warnings = Vec::new();

        let doc = PdfDocument::from_html(html, &images, &fonts, &options, &mut warnings)
            .map_err(|e| RenderError::Engine(e.to_string()))?;

        // Layout warnings are non-fatal; surface them for diagnosis
        if !warnings.is_empty() {
            logger::log_warning(&format!(
                "Renderer produced {} warning(s) for a {}-byte document",
                warnings.len(),
                html.len()
            ));
        }

        let mut save_warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut save_warnings);
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_minimal_document() {
        let renderer = PrintPdfRenderer::new();
        let bytes = renderer
            .render("<html><body><p>hi</p></body></html>")
            .expect("minimal document should render");
        assert!(!bytes.is_empty());
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn renders_document_with_link() {
        let renderer = PrintPdfRenderer::new();
        let bytes = renderer
            .render(r#"<html><body><a href="https://example.com">link</a></body></html>"#)
            .expect("document with hyperlink should render");
        assert!(bytes.starts_with(b"%PDF"));
    }
}
