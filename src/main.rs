//! Traced CRUD service (v1)
//!
//! # Architecture Overview
//!
//! ```text
//!   Client Request
//!   ──────────────▶ listener ──▶ http server ──▶ handlers ──▶ ResourceStore
//!                                    │               │
//!                                    │               └──▶ dice roller
//!                                    ▼
//!                     request id + request span (tower-http)
//!
//!   Cross-cutting: config (TOML + env), observability (logs, spans,
//!   Prometheus), lifecycle (startup, signals, graceful shutdown)
//! ```

use std::path::PathBuf;

use clap::Parser;

use traced_crud::config::{self, ResourceKind};
use traced_crud::lifecycle::startup;
use traced_crud::observability::logging;

#[derive(Parser)]
#[command(name = "traced-crud")]
#[command(about = "Instrumented dice roller and in-memory CRUD service", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Resource served by this instance (users or statements).
    #[arg(short, long)]
    resource: Option<ResourceKind>,

    /// Listen port; takes precedence over SERVICE_PORT and PORT.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = config::load_config(cli.config.as_deref())?;
    if let Some(resource) = cli.resource {
        config.service.resource = resource;
    }
    if let Some(port) = cli.port {
        config.listener.port = port;
    }

    logging::init_logging(&config.observability)?;

    tracing::info!("traced-crud v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.bind_address(),
        resource = %config.service.resource,
        request_timeout_secs = config.timeouts.request_secs,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    startup::run(config).await?;
    Ok(())
}
