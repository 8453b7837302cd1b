//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the gateway catch-all route
//! - Wire up middleware (tracing)
//! - Bind server to listener
//! - Hand raw requests to the gateway pipeline
//! - Observability (metrics, correlation IDs)

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::Response,
    routing::any,
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;
use tracing::Instrument;

use crate::config::ServerConfig;
use crate::gateway::{self, BackendSource, HttpTransport, InboundRequest, Transport};
use crate::http::request::request_id;
use crate::observability::metrics;

/// Application state injected into handlers.
///
/// Read-only: every request works on its own values.
#[derive(Clone)]
pub struct AppState {
    pub transport: Arc<dyn Transport>,
    pub backend: Arc<BackendSource>,
    pub route_prefix: Arc<str>,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a server forwarding through the production HTTP transport.
    pub fn new(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let transport = Arc::new(HttpTransport::new()?);
        let backend = BackendSource::Env(config.gateway.backend_url_vars.clone());
        Ok(Self::with_transport(config, transport, backend))
    }

    /// Create a server with an explicit transport and backend source.
    pub fn with_transport(
        config: ServerConfig,
        transport: Arc<dyn Transport>,
        backend: BackendSource,
    ) -> Self {
        let state = AppState {
            transport,
            backend: Arc::new(backend),
            route_prefix: Arc::from(config.gateway.route_prefix.as_str()),
        };

        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(state: AppState) -> Router {
        let prefix = state.route_prefix.to_string();
        Router::new()
            .route(&prefix, any(gateway_handler))
            .route(&format!("{prefix}/"), any(gateway_handler))
            .route(&format!("{prefix}/{{*path}}"), any(gateway_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// The configured router, for embedding or in-process tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            route_prefix = %self.config.gateway.route_prefix,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Catch-all gateway handler.
///
/// Takes the raw request so no extractor touches the body.
async fn gateway_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let request_id = request_id(request.headers());
    let method = request.method().to_string();

    let span = tracing::info_span!(
        "gateway",
        request_id = %request_id,
        method = %method,
        path = %request.uri().path(),
    );

    async move {
        let inbound = InboundRequest::from_http(request, &state.route_prefix);
        let candidates = state.backend.candidates();

        let response = gateway::handle(state.transport.as_ref(), &candidates, inbound).await;

        tracing::debug!(status = %response.status(), "Request relayed");
        metrics::record_request(&method, response.status().as_u16(), start_time);
        response
    }
    .instrument(span)
    .await
}
