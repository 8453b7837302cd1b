//! Target resolution: configuration plus inbound path/query into an upstream URL.
//!
//! # Responsibilities
//! - Pick the backend base URL from prioritized environment candidates
//! - Join path segments without re-encoding them
//! - Rebuild the query string minus the routing parameter

use url::Url;

use super::error::GatewayError;
use super::request::QueryParams;

/// Query key that carries the catch-all path segments.
pub const ROUTING_PARAM: &str = "path";

/// One possible source of the backend base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrlCandidate {
    /// Name of the variable the value was read from.
    pub source: String,
    pub value: Option<String>,
}

/// Where the gateway looks for its backend base URL on every request.
#[derive(Debug, Clone)]
pub enum BackendSource {
    /// Environment variables, highest priority first.
    Env(Vec<String>),
    /// Fixed candidates, mostly for tests and embedding.
    Fixed(Vec<BaseUrlCandidate>),
}

impl BackendSource {
    pub fn candidates(&self) -> Vec<BaseUrlCandidate> {
        match self {
            BackendSource::Env(vars) => vars
                .iter()
                .map(|var| BaseUrlCandidate {
                    source: var.clone(),
                    value: std::env::var(var).ok(),
                })
                .collect(),
            BackendSource::Fixed(candidates) => candidates.clone(),
        }
    }
}

/// Backend base URL resolved for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    base_url: String,
}

impl GatewayConfig {
    /// First non-empty candidate wins; exactly one trailing slash is stripped.
    pub fn resolve(candidates: &[BaseUrlCandidate]) -> Result<Self, GatewayError> {
        let Some((source, value)) = candidates.iter().find_map(|c| {
            c.value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (c.source.as_str(), v))
        }) else {
            let names: Vec<&str> = candidates.iter().map(|c| c.source.as_str()).collect();
            return Err(GatewayError::Configuration(format!(
                "no backend URL set (checked {})",
                names.join(", ")
            )));
        };

        if Url::parse(value).map(|u| u.cannot_be_a_base()).unwrap_or(true) {
            return Err(GatewayError::Configuration(format!(
                "{source} is not an absolute URL"
            )));
        }

        let base_url = value.strip_suffix('/').unwrap_or(value).to_string();
        Ok(Self { base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Build `base + "/" + joinedPath [+ "?" + query]`.
pub fn build_target_url(config: &GatewayConfig, segments: &[String], query: &QueryParams) -> String {
    let mut target = format!("{}/{}", config.base_url, segments.join("/"));

    let rebuilt = rebuild_query(query);
    if !rebuilt.is_empty() {
        target.push('?');
        target.push_str(&rebuilt);
    }
    target
}

/// Re-serialize every key except the routing parameter, once per value.
pub fn rebuild_query(query: &QueryParams) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, values) in query.iter().filter(|(key, _)| *key != ROUTING_PARAM) {
        for value in values {
            serializer.append_pair(key, value);
        }
    }
    serializer.finish()
}
