//! Configuration validation.
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::ServerConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field}: `{value}` is not a socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("gateway.route_prefix: `{0}` must start with '/', not end with '/', and not be the root")]
    InvalidRoutePrefix(String),

    #[error("gateway.backend_url_vars: at least one variable is required")]
    NoBackendVars,

    #[error("gateway.backend_url_vars: blank variable name")]
    BlankBackendVar,
}

pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_address("listener.bind_address", &config.listener.bind_address, &mut errors);
    if config.observability.metrics_enabled {
        check_address(
            "observability.metrics_address",
            &config.observability.metrics_address,
            &mut errors,
        );
    }

    let prefix = &config.gateway.route_prefix;
    if !prefix.starts_with('/') || prefix.ends_with('/') {
        errors.push(ValidationError::InvalidRoutePrefix(prefix.clone()));
    }

    let vars = &config.gateway.backend_url_vars;
    if vars.is_empty() {
        errors.push(ValidationError::NoBackendVars);
    } else if vars.iter().any(|v| v.trim().is_empty()) {
        errors.push(ValidationError::BlankBackendVar);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}
