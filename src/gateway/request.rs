//! Request and response values flowing through the gateway.
//!
//! # Design Decisions
//! - Every value is owned by exactly one call; nothing is shared
//! - Path segments keep their on-the-wire encoding
//! - Query and header keys keep first-appearance order

use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, HeaderName, HeaderValue, Method, Request, StatusCode},
};

/// One header name may arrive with one or several values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderValues {
    One(HeaderValue),
    Many(Vec<HeaderValue>),
}

impl HeaderValues {
    /// Collapse into a single value, comma-joining multiple entries.
    pub fn flatten(&self) -> Option<HeaderValue> {
        match self {
            HeaderValues::One(value) => Some(value.clone()),
            HeaderValues::Many(values) => {
                let joined = values
                    .iter()
                    .map(HeaderValue::as_bytes)
                    .collect::<Vec<_>>()
                    .join(&b", "[..]);
                HeaderValue::from_bytes(&joined).ok()
            }
        }
    }
}

/// Ordered query parameters; each key maps to its values in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, Vec<String>)>);

impl QueryParams {
    /// Parse a raw (still percent-encoded) query string.
    pub fn parse(raw: &str) -> Self {
        let mut params = Self::default();
        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            params.append(key.into_owned(), value.into_owned());
        }
        params
    }

    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, values)) => values.push(value.into()),
            None => self.0.push((key, vec![value.into()])),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A request as it arrived at the gateway route.
#[derive(Debug)]
pub struct InboundRequest {
    pub method: Method,
    pub segments: Vec<String>,
    pub query: QueryParams,
    pub headers: Vec<(HeaderName, HeaderValues)>,
    pub body: Body,
}

impl InboundRequest {
    /// Decompose an axum request captured under `route_prefix`.
    pub fn from_http(request: Request<Body>, route_prefix: &str) -> Self {
        let (parts, body) = request.into_parts();

        let path = parts.uri.path();
        let rest = path.strip_prefix(route_prefix).unwrap_or(path);
        let rest = rest.strip_prefix('/').unwrap_or(rest);
        let segments = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split('/').map(str::to_owned).collect()
        };

        let query = parts.uri.query().map(QueryParams::parse).unwrap_or_default();

        Self {
            method: parts.method,
            segments,
            query,
            headers: group_headers(&parts.headers),
            body,
        }
    }
}

fn group_headers(headers: &HeaderMap) -> Vec<(HeaderName, HeaderValues)> {
    headers
        .keys()
        .map(|name| {
            let mut values: Vec<HeaderValue> = headers.get_all(name).iter().cloned().collect();
            let grouped = if values.len() == 1 {
                HeaderValues::One(values.remove(0))
            } else {
                HeaderValues::Many(values)
            };
            (name.clone(), grouped)
        })
        .collect()
}

/// The request the gateway issues to the backend.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

/// A fully buffered backend reply.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}
