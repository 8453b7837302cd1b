//! Request correlation.
//!
//! # Design Decisions
//! - Reuse the caller's `x-request-id` when present, otherwise mint a UUID v4
//! - The ID only tags log events and metrics; forwarded headers are untouched

use axum::http::HeaderMap;
use uuid::Uuid;

pub const X_REQUEST_ID: &str = "x-request-id";

/// Correlation ID for one inbound request.
pub fn request_id(headers: &HeaderMap) -> String {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}
