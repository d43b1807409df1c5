//! HTML-to-PDF rendering abstraction.
//!
//! The conversion endpoint delegates the entire HTML/CSS layout problem to
//! an external engine. The engine sits behind [`HtmlRenderer`] so the
//! concrete implementation is swappable without touching handler logic.

mod engine;

pub use engine::PrintPdfRenderer;

use thiserror::Error;

/// Failure reported by a rendering engine.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The engine could not turn the document into a PDF.
    #[error("{0}")]
    Engine(String),
}

/// A synchronous HTML-to-PDF rendering engine.
///
/// Implementations take opaque HTML text and return the complete PDF as an
/// in-memory byte buffer. Hyperlinks in the source document must survive as
/// link annotations in the output. One call per request, no retries; callers
/// decide where the blocking work runs.
pub trait HtmlRenderer: Send + Sync {
    fn render(&self, html: &str) -> Result<Vec<u8>, RenderError>;
}
