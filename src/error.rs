//! Error taxonomy for the HTTP surface.
//!
//! Two failure classes cover every endpoint:
//!
//! * [`ApiError::InvalidInput`] — the caller omitted a required field.
//!   Reported as 400 with a JSON `error` body.
//! * [`ApiError::Conversion`] — the rendering engine failed. Reported as
//!   500 with a JSON `error` body; the underlying message is logged.
//!
//! Every handler converts its failures into one of these at the handler
//! boundary; nothing propagates as an unhandled fault.

use hyper::StatusCode;
use thiserror::Error;

use crate::render::RenderError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A required request field was missing or empty.
    #[error("{0}")]
    InvalidInput(String),

    /// The rendering engine rejected the document.
    #[error("PDF conversion failed: {0}")]
    Conversion(#[from] RenderError),
}

impl ApiError {
    pub fn invalid_input(message: &str) -> Self {
        Self::InvalidInput(message.to_string())
    }

    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Conversion(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_maps_to_400() {
        let e = ApiError::invalid_input("No HTML content provided");
        assert_eq!(e.status(), StatusCode::BAD_REQUEST);
        assert_eq!(e.to_string(), "No HTML content provided");
    }

    #[test]
    fn conversion_maps_to_500() {
        let e = ApiError::Conversion(RenderError::Engine("layout failed".to_string()));
        assert_eq!(e.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(e.to_string().starts_with("PDF conversion failed:"));
        assert!(e.to_string().contains("layout failed"));
    }
}
