//! Template catalog handler

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use crate::http;
use crate::templates::CATALOG;

/// `GET /templates` — the fixed list of available document templates
pub fn handle_templates() -> Response<Full<Bytes>> {
    http::json_response(StatusCode::OK, &serde_json::json!({ "templates": &CATALOG }))
}
