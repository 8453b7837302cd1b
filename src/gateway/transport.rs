//! Outbound transport to the backend.
//!
//! # Design Decisions
//! - A trait seam so the pipeline can run against a fake backend
//! - The HTTP implementation never follows redirects
//! - No timeout or retry here; the hosting environment owns deadlines

use futures_util::future::BoxFuture;
use reqwest::redirect::Policy;

use super::error::BoxError;
use super::request::{OutboundRequest, UpstreamResponse};

/// Sends one outbound request and returns the fully buffered reply.
pub trait Transport: Send + Sync {
    fn send(&self, request: OutboundRequest) -> BoxFuture<'_, Result<UpstreamResponse, BoxError>>;
}

/// `reqwest`-backed transport used in production.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .no_proxy()
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: OutboundRequest) -> BoxFuture<'_, Result<UpstreamResponse, BoxError>> {
        Box::pin(async move {
            let mut builder = self
                .client
                .request(request.method, request.url.as_str())
                .headers(request.headers);
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await?;
            let status = response.status();
            let headers = response.headers().clone();
            // A short or broken body surfaces here as an error, not a truncated success.
            let body = response.bytes().await?;

            Ok(UpstreamResponse {
                status,
                headers,
                body,
            })
        })
    }
}
