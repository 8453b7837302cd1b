//! Failure classification for the gateway pipeline.
//!
//! # Design Decisions
//! - Exactly two kinds: operator-caused (500) and backend-caused (502)
//! - Upstream causes are kept as a source for logging, never rendered
//! - Error bodies are a complete JSON object `{"error": "..."}`

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use super::body::InboundBodyError;

/// Boxed cause carried by transport and body-read failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Message returned to callers for every upstream failure.
pub const UPSTREAM_ERROR_MESSAGE: &str = "Failed to forward request to backend service";

/// Error produced by any stage of the gateway pipeline.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// No usable backend base URL is configured.
    #[error("Gateway misconfigured: {0}")]
    Configuration(String),

    /// The backend could not be reached or replied with garbage.
    #[error("{}", UPSTREAM_ERROR_MESSAGE)]
    Upstream(#[source] BoxError),
}

impl GatewayError {
    pub fn upstream(cause: impl Into<BoxError>) -> Self {
        GatewayError::Upstream(cause.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Short label used for logs and metrics.
    ///
    /// Inbound body failures share the 502 classification but are told apart
    /// here so they are not blamed on the backend.
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::Configuration(_) => "configuration",
            GatewayError::Upstream(cause) if cause.is::<InboundBodyError>() => "inbound_body",
            GatewayError::Upstream(_) => "upstream",
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
