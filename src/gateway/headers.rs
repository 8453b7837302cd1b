//! Inbound header sanitization.
//!
//! The gateway performs no authentication or content inspection: apart from
//! `Host`, which must name the backend rather than the public edge, every
//! header is forwarded as received.

use axum::http::{header, HeaderMap, HeaderName};

use super::request::HeaderValues;

/// Drop `Host` and flatten multi-valued headers into one comma-joined value.
pub fn sanitize_headers(headers: &[(HeaderName, HeaderValues)]) -> HeaderMap {
    let mut sanitized = HeaderMap::with_capacity(headers.len());
    for (name, values) in headers {
        if is_host(name) {
            continue;
        }
        if let Some(value) = values.flatten() {
            sanitized.insert(name.clone(), value);
        }
    }
    sanitized
}

fn is_host(name: &HeaderName) -> bool {
    name.as_str().eq_ignore_ascii_case(header::HOST.as_str())
}
