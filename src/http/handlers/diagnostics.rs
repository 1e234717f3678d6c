//! Demonstration and health endpoints.

use std::time::Instant;

use axum::http::StatusCode;
use tracing::field::Empty;

use super::record_outcome;
use crate::http::error::ApiError;

pub const SYNTHETIC_ERROR_MESSAGE: &str = "Useless error message";

/// `GET /error`: always fails, to exercise error capture in logs and spans.
#[tracing::instrument(name = "error_creator", skip_all, fields(status = Empty))]
pub async fn synthetic_error() -> ApiError {
    let start = Instant::now();
    let err = ApiError::Internal(SYNTHETIC_ERROR_MESSAGE.to_string());
    tracing::error!(error = %err, "Error caught");

    record_outcome("error", start, err.status());
    err
}

/// `GET /metrics`: liveness stub answering "OK".
pub async fn health() -> &'static str {
    let start = Instant::now();
    tracing::info!("sending metrics");
    record_outcome("health", start, StatusCode::OK);
    "OK"
}
