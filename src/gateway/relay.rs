//! Response relay back to the original caller.

use axum::{
    body::Body,
    http::{header, Response},
};

use super::request::UpstreamResponse;

/// Copy status, headers (minus `Transfer-Encoding`) and the buffered body.
///
/// The body is already fully materialized, so any upstream chunked framing
/// no longer describes it.
pub fn relay(upstream: UpstreamResponse) -> Response<Body> {
    let UpstreamResponse {
        status,
        mut headers,
        body,
    } = upstream;

    headers.remove(header::TRANSFER_ENCODING);

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}
