//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Seed the resource store selected by config
//! - Wire up middleware (request ID, tracing, timeout)
//! - Bind server to listener and shut down on signal

use std::time::Duration;

use axum::{body::Body, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{ResourceKind, ServiceConfig};
use crate::http::handlers::{
    diagnostics,
    dice::{self, DiceLimits},
    resource::resource_router,
};
use crate::lifecycle::ShutdownSignal;
use crate::observability::tracing::make_request_span;
use crate::resources::{Statement, User};
use crate::store::ResourceStore;

/// HTTP server for one service instance.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let router = build_router(&config);
        Self { router, config }
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownSignal,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            service = %self.config.service.name,
            resource = %self.config.service.resource,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.recv().await;
                tracing::info!("HTTP server draining");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
///
/// Each call seeds a fresh store.
#[allow(deprecated)]
pub fn build_router(config: &ServiceConfig) -> Router {
    let resources = match config.service.resource {
        ResourceKind::Users => resource_router(ResourceStore::<User>::seeded()),
        ResourceKind::Statements => resource_router(ResourceStore::<Statement>::seeded()),
    };

    let limits = DiceLimits {
        max_rolls: config.dice.max_rolls,
    };

    Router::new()
        .route("/rolldice", get(dice::roll))
        .with_state(limits)
        .route("/error", get(diagnostics::synthetic_error))
        .route("/metrics", get(diagnostics::health))
        .merge(resources)
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
