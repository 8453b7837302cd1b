//! Backend-forwarding gateway library.

pub mod config;
pub mod gateway;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::ServerConfig;
pub use gateway::{GatewayError, Transport};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
