//! Backend-forwarding gateway.
//!
//! # Data Flow
//! ```text
//! InboundRequest
//!     → target.rs (base URL candidates + segments + query → upstream URL)
//!     → headers.rs (drop Host, flatten multi-values)
//!     → body.rs (buffer body unless GET/HEAD)
//!     → transport.rs (single outbound call, redirects not followed)
//!     → relay.rs (status, headers minus Transfer-Encoding, body)
//!     → Response to caller
//! ```
//!
//! # Design Decisions
//! - Linear pipeline: no retries, any stage failure short-circuits
//! - Stages are plain functions over owned values; nothing outlives the call
//! - If the caller goes away mid-flight the outbound call is not aborted by
//!   the gateway itself

pub mod body;
pub mod error;
pub mod headers;
pub mod relay;
pub mod request;
pub mod target;
pub mod transport;

use axum::{
    body::Body,
    http::Response,
    response::IntoResponse,
};

pub use error::{GatewayError, UPSTREAM_ERROR_MESSAGE};
pub use request::{HeaderValues, InboundRequest, OutboundRequest, QueryParams, UpstreamResponse};
pub use target::{BackendSource, BaseUrlCandidate, GatewayConfig};
pub use transport::{HttpTransport, Transport};

/// Run the four stages and return the relayed response.
pub async fn forward<T>(
    transport: &T,
    candidates: &[BaseUrlCandidate],
    inbound: InboundRequest,
) -> Result<Response<Body>, GatewayError>
where
    T: Transport + ?Sized,
{
    let InboundRequest {
        method,
        segments,
        query,
        headers: inbound_headers,
        body: inbound_body,
    } = inbound;

    let config = GatewayConfig::resolve(candidates)?;
    let url = target::build_target_url(&config, &segments, &query);

    let mut outbound_headers = headers::sanitize_headers(&inbound_headers);

    let body = body::buffer_body(&method, inbound_body).await?;
    body::frame_outbound(&mut outbound_headers);

    tracing::debug!(method = %method, url = %url, "Forwarding to backend");

    let upstream = transport
        .send(OutboundRequest {
            method,
            url,
            headers: outbound_headers,
            body,
        })
        .await
        .map_err(GatewayError::Upstream)?;

    Ok(relay::relay(upstream))
}

/// Like [`forward`], but turns failures into their JSON error responses.
pub async fn handle<T>(
    transport: &T,
    candidates: &[BaseUrlCandidate],
    inbound: InboundRequest,
) -> Response<Body>
where
    T: Transport + ?Sized,
{
    match forward(transport, candidates, inbound).await {
        Ok(response) => response,
        Err(err) => {
            match &err {
                GatewayError::Configuration(reason) => {
                    tracing::error!(reason = %reason, "Gateway misconfigured");
                }
                GatewayError::Upstream(cause) if err.kind() == "inbound_body" => {
                    tracing::warn!(
                        error = %cause,
                        stage = "inbound_body",
                        "Failed to read inbound request body"
                    );
                }
                GatewayError::Upstream(cause) => {
                    tracing::error!(error = %cause, stage = "upstream", "Upstream request failed");
                }
            }
            crate::observability::metrics::record_failure(err.kind());
            err.into_response()
        }
    }
}
