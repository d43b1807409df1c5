//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, body size
//! limits, endpoint dispatch, and access logging.

mod catalog;
mod convert;
mod logo;
mod static_files;

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::AppState;
use crate::error::ApiError;
use crate::http;
use crate::logger::{self, AccessLogEntry};

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = std::time::Instant::now();

    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(ToString::to_string);
    let http_version = format_version(req.version());
    let referer = header_string(&req, "referer");
    let user_agent = header_string(&req, "user-agent");

    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    let response = dispatch(req, &state, &method, &path, query.as_deref()).await;

    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(peer_addr.ip().to_string(), method.to_string(), path);
        entry.query = query;
        entry.http_version = http_version;
        entry.status = response.status().as_u16();
        entry.body_bytes = content_length_of(&response);
        entry.referer = referer;
        entry.user_agent = user_agent;
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route the request to its endpoint handler
async fn dispatch(
    req: Request<hyper::body::Incoming>,
    state: &Arc<AppState>,
    method: &Method,
    path: &str,
    query: Option<&str>,
) -> Response<Full<Bytes>> {
    if *method == Method::OPTIONS {
        return http::build_options_response(state.config.http.enable_cors);
    }

    if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        return resp;
    }

    let is_head = *method == Method::HEAD;

    match (method, path) {
        (&Method::GET | &Method::HEAD, "/") => {
            static_files::serve_index(&state.config.resources, is_head).await
        }
        (&Method::POST, "/convert") => match read_body(req).await {
            Ok(body) => convert::handle_convert(&body, Arc::clone(&state.renderer)).await,
            Err(resp) => resp,
        },
        (&Method::POST, "/preview") => match read_body(req).await {
            Ok(body) => convert::handle_preview(&body),
            Err(resp) => resp,
        },
        (&Method::GET, "/get_logo") => logo::handle_get_logo(query),
        (&Method::GET, "/templates") => catalog::handle_templates(),
        (&Method::GET, "/healthz") => http::build_health_response(),
        (&Method::GET | &Method::HEAD, asset) if asset.starts_with("/static/") => {
            static_files::serve_asset(&state.config.resources, asset, is_head).await
        }
        // Known path, wrong method
        (_, "/" | "/convert" | "/preview" | "/get_logo" | "/templates" | "/healthz") => {
            logger::log_warning(&format!("Method not allowed: {method} {path}"));
            http::build_405_response(allowed_methods(path))
        }
        _ => http::build_404_response(),
    }
}

fn allowed_methods(path: &str) -> &'static str {
    match path {
        "/convert" | "/preview" => "POST, OPTIONS",
        _ => "GET, HEAD, OPTIONS",
    }
}

/// Body size for access logging, taken from the Content-Length header the
/// builders set
fn content_length_of(response: &Response<Full<Bytes>>) -> usize {
    response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse().ok())
        .unwrap_or(0)
}

/// Collect the request body, mapping transport failures to a 400 response
async fn read_body(
    req: Request<hyper::body::Incoming>,
) -> Result<Bytes, Response<Full<Bytes>>> {
    match req.collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(e) => {
            logger::log_error(&format!("Failed to read request body: {e}"));
            Err(http::build_error_response(&ApiError::invalid_input(
                "Failed to read request body",
            )))
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

fn header_string(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn format_version(version: hyper::Version) -> String {
    if version == hyper::Version::HTTP_11 {
        "1.1".to_string()
    } else if version == hyper::Version::HTTP_10 {
        "1.0".to_string()
    } else if version == hyper::Version::HTTP_2 {
        "2".to_string()
    } else {
        format!("{version:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_methods_per_path() {
        assert_eq!(allowed_methods("/convert"), "POST, OPTIONS");
        assert_eq!(allowed_methods("/preview"), "POST, OPTIONS");
        assert_eq!(allowed_methods("/templates"), "GET, HEAD, OPTIONS");
    }

    #[test]
    fn version_formatting() {
        assert_eq!(format_version(hyper::Version::HTTP_11), "1.1");
        assert_eq!(format_version(hyper::Version::HTTP_2), "2");
    }
}
