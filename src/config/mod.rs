//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//!
//! Per request (not part of this subsystem):
//!     BACKEND_URL / API_BASE_URL → gateway::target
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so the file is optional
//! - The backend URL is read from the environment per request, never cached here
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ForwardingConfig, ListenerConfig, ObservabilityConfig, ServerConfig};
