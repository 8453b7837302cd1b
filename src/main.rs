//! Backend Gateway
//!
//! Relays every request under a fixed route prefix to an internal backend
//! service whose base URL comes from the environment.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────────────┐
//!                     │                      GATEWAY                          │
//!   Client Request    │  ┌──────────┐   ┌──────────┐   ┌──────────┐          │
//!   ──────────────────┼─▶│  target  │──▶│ headers  │──▶│   body   │──────────┼──▶ Backend
//!                     │  │ resolver │   │sanitizer │   │forwarder │          │
//!                     │  └──────────┘   └──────────┘   └──────────┘          │
//!   Client Response   │                  ┌──────────┐                        │
//!   ◀─────────────────┼──────────────────│  relay   │◀───────────────────────┼─── Backend
//!                     │                  └──────────┘                        │
//!                     └──────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use backend_gateway::config::{load_config, ServerConfig};
use backend_gateway::lifecycle::{signals, Shutdown};
use backend_gateway::observability::{logging, metrics};
use backend_gateway::HttpServer;

#[derive(Parser)]
#[command(name = "backend-gateway")]
#[command(about = "Relay HTTP requests to an internal backend service", long_about = None)]
struct Cli {
    /// Path to a TOML settings file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability.log_level);

    tracing::info!("backend-gateway v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        route_prefix = %config.gateway.route_prefix,
        backend_url_vars = ?config.gateway.backend_url_vars,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    tokio::spawn(signals::wait_for_signal(shutdown.clone()));

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
