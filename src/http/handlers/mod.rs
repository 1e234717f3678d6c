//! Route handlers.
//!
//! Each handler runs inside a span created by `#[tracing::instrument]`, so
//! the span closes whether the handler returns a record or an error. The
//! span's `status` field is filled in by [`finish`].

pub mod diagnostics;
pub mod dice;
pub mod resource;

use std::time::Instant;

use axum::http::StatusCode;
use tracing::Span;

use crate::http::error::ApiError;
use crate::observability::metrics;

/// Record the outcome of a handler on its span and in metrics.
pub(crate) fn finish<T>(
    handler: &'static str,
    start: Instant,
    result: Result<T, ApiError>,
) -> Result<T, ApiError> {
    let status = match &result {
        Ok(_) => StatusCode::OK,
        Err(err) => err.status(),
    };

    record_outcome(handler, start, status);
    match &result {
        Ok(_) => tracing::info!(handler, status = status.as_u16(), "Request completed"),
        Err(err) => {
            tracing::warn!(handler, status = status.as_u16(), error = %err, "Request failed")
        }
    }

    result
}

/// Record a response status on the current span and in metrics.
pub(crate) fn record_outcome(handler: &'static str, start: Instant, status: StatusCode) {
    Span::current().record("status", status.as_u16());
    metrics::record_request(handler, status.as_u16(), start);
}
