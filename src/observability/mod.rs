//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Gateway handler produces:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (request counters, latency histogram, failure counters)
//!
//! Consumers:
//!     → stdout (tracing-subscriber fmt layer)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through log events, never into forwarded headers
//! - Metrics go through the `metrics` facade; recording is a no-op until an
//!   exporter is installed

pub mod logging;
pub mod metrics;
