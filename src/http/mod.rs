//! HTTP protocol layer module
//!
//! Response builders, form decoding, and MIME detection, decoupled from
//! specific endpoint logic.

pub mod form;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_405_response, build_413_response, build_asset_response,
    build_error_response, build_health_response, build_html_response, build_options_response,
    build_pdf_response, json_response,
};
