//! Body forwarding by method semantics.
//!
//! # Design Decisions
//! - GET and HEAD never read the inbound body and never send one
//! - Everything else is buffered in full before the outbound call starts
//! - Framing headers are re-derived from the buffer, not copied

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderMap, Method},
};

use super::error::GatewayError;

/// The caller's body could not be read to the end.
#[derive(Debug, thiserror::Error)]
#[error("failed to read inbound body: {0}")]
pub struct InboundBodyError(#[source] pub axum::Error);

/// Whether a request with this method carries a body upstream.
pub fn forwards_body(method: &Method) -> bool {
    !matches!(*method, Method::GET | Method::HEAD)
}

/// Read the whole inbound body, or skip it for GET/HEAD.
pub async fn buffer_body(method: &Method, body: Body) -> Result<Option<Bytes>, GatewayError> {
    if !forwards_body(method) {
        return Ok(None);
    }

    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(|e| GatewayError::upstream(InboundBodyError(e)))?;

    tracing::trace!(bytes = bytes.len(), "Inbound body buffered");
    Ok(Some(bytes))
}

/// Remove inbound framing headers; the transport frames the buffered body itself.
pub fn frame_outbound(headers: &mut HeaderMap) {
    headers.remove(header::CONTENT_LENGTH);
    headers.remove(header::TRANSFER_ENCODING);
}
