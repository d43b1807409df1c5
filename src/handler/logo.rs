//! Logo lookup handler
//!
//! Builds the logo-image URL for a company domain. This endpoint performs
//! no network call itself; it only normalizes the submitted domain and
//! points the client at the third-party logo host.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use crate::error::ApiError;
use crate::http::{self, form};

/// Third-party logo host; referenced by URL construction only, never called
const LOGO_BASE_URL: &str = "https://logo.clearbit.com";

/// `GET /get_logo?domain=...`
pub fn handle_get_logo(query: Option<&str>) -> Response<Full<Bytes>> {
    let domain = query
        .and_then(|q| form::field(q.as_bytes(), "domain"))
        .filter(|d| !d.is_empty());

    match domain {
        Some(domain) => {
            let logo_url = format!("{LOGO_BASE_URL}/{}", normalize_domain(&domain));
            http::json_response(StatusCode::OK, &serde_json::json!({ "logo_url": logo_url }))
        }
        None => http::build_error_response(&ApiError::invalid_input("No domain provided")),
    }
}

/// Reduce a user-supplied domain string to a bare host name.
///
/// Mirrors URL netloc extraction: a `scheme://` prefix is dropped along with
/// everything after the host; input without a scheme token is read as if it
/// were `http://{input}`. A single leading `www.` is stripped. Anything that
/// still fails to look like a host (for example an `http`-prefixed string
/// with no `://`) passes through unchanged — callers get a best-effort URL
/// rather than an error.
pub fn normalize_domain(input: &str) -> String {
    let host = match input.split_once("://") {
        // Scheme present: the netloc runs up to the first path separator
        Some((_, rest)) => rest.split(['/', '?', '#']).next().unwrap_or(""),
        // No scheme token at all: parse as if prefixed with http://
        None if !input.starts_with("http") => input.split(['/', '?', '#']).next().unwrap_or(""),
        // Starts with "http" but carries no "://": keep the whole string
        None => input,
    };

    let host = if host.is_empty() { input } else { host };
    host.strip_prefix("www.").unwrap_or(host).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn strips_www_prefix() {
        assert_eq!(normalize_domain("www.example.com"), "example.com");
    }

    #[test]
    fn bare_domain_unchanged() {
        assert_eq!(normalize_domain("example.com"), "example.com");
    }

    #[test]
    fn strips_scheme_and_path() {
        assert_eq!(
            normalize_domain("https://www.example.com/about?ref=1"),
            "example.com"
        );
        assert_eq!(normalize_domain("http://example.com"), "example.com");
    }

    #[test]
    fn drops_path_from_schemeless_input() {
        assert_eq!(normalize_domain("example.com/about"), "example.com");
    }

    #[test]
    fn malformed_input_passes_through() {
        // No dots, no scheme: best-effort passthrough, not an error
        assert_eq!(normalize_domain("localhost"), "localhost");
        // "http"-prefixed but not a URL
        assert_eq!(normalize_domain("httpexample"), "httpexample");
    }

    #[test]
    fn strips_www_from_multi_label_domain() {
        assert_eq!(normalize_domain("www.example.co.uk"), "example.co.uk");
    }

    #[tokio::test]
    async fn missing_domain_is_400() {
        let response = handle_get_logo(None);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = handle_get_logo(Some("domain="));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn builds_logo_url() {
        let response = handle_get_logo(Some("domain=www.example.com"));
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["logo_url"], "https://logo.clearbit.com/example.com");
    }
}
