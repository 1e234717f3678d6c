//! Metrics collection and exposition.
//!
//! # Metrics
//! - `service_requests_total` (counter): requests by handler, status
//! - `service_request_duration_seconds` (histogram): handler latency
//! - `service_store_records` (gauge): records held per resource
//! - `service_dice_rolls_total` (counter): individual dice rolled
//!
//! Without an installed recorder every call is a no-op, so handlers record
//! unconditionally.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Prometheus exporter listening");
    Ok(())
}

/// Record one finished request.
pub fn record_request(handler: &'static str, status: u16, start: Instant) {
    metrics::counter!(
        "service_requests_total",
        "handler" => handler,
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("service_request_duration_seconds", "handler" => handler)
        .record(start.elapsed().as_secs_f64());
}

/// Publish the current size of a resource store.
pub fn record_store_size(resource: &'static str, len: usize) {
    metrics::gauge!("service_store_records", "resource" => resource).set(len as f64);
}
