//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and the dice roller produce:
//!     → logging.rs (structured log events, pretty or JSON)
//!     → metrics.rs (counters, gauges, histograms)
//!     → tracing.rs (request spans with request and trace IDs)
//!
//! Consumers:
//!     → Log aggregation (stdout, shipped as JSON lines)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Every handler runs inside its own span, closed on every exit path
//! - Request ID flows through all spans
//! - Metrics are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
pub mod tracing;
