//! `GET /rolldice?rolls=N`

use std::time::Instant;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::field::Empty;

use super::record_outcome;
use crate::dice::roll_dice;

/// Message returned when `rolls` is absent or unparseable.
pub const MISSING_ROLLS: &str = "Request parameter 'rolls' is missing or not a number.";

/// Faces rolled by the endpoint: `[1, 6)`.
pub const FACES: (i64, i64) = (1, 6);

/// Limits applied to the dice endpoint.
#[derive(Debug, Clone, Copy)]
pub struct DiceLimits {
    pub max_rolls: u64,
}

#[derive(Debug, Deserialize)]
pub struct RollParams {
    rolls: Option<String>,
}

/// A query string that fails to deserialize (`?rolls=1&rolls=2`) is answered
/// like a missing `rolls`.
#[tracing::instrument(name = "rolldice", skip_all, fields(rolls = Empty, status = Empty))]
pub async fn roll(
    State(limits): State<DiceLimits>,
    params: Result<Query<RollParams>, QueryRejection>,
) -> Response {
    let start = Instant::now();
    let rolls = match params {
        Ok(Query(params)) => params.rolls,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable dice query");
            None
        }
    };
    let response = roll_response(limits, rolls.as_deref());

    record_outcome("rolldice", start, response.status());
    response
}

fn roll_response(limits: DiceLimits, rolls: Option<&str>) -> Response {
    let Some(count) = rolls.and_then(|r| r.trim().parse::<u64>().ok()) else {
        tracing::warn!(rolls = ?rolls, "Rejecting dice roll");
        return (StatusCode::BAD_REQUEST, MISSING_ROLLS).into_response();
    };
    tracing::Span::current().record("rolls", count);

    if count > limits.max_rolls {
        tracing::warn!(count, max = limits.max_rolls, "Too many rolls requested");
        let message = format!("Request parameter 'rolls' must not exceed {}.", limits.max_rolls);
        return (StatusCode::BAD_REQUEST, message).into_response();
    }

    tracing::info!(count, "Rolling dice");
    match roll_dice(count as usize, FACES.0, FACES.1) {
        Ok(results) => Json(results).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Dice roll failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMITS: DiceLimits = DiceLimits { max_rolls: 10 };

    #[test]
    fn test_missing_rolls_is_bad_request() {
        assert_eq!(roll_response(LIMITS, None).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_non_numeric_and_negative_are_bad_request() {
        for raw in ["abc", "", "-3", "2.5"] {
            assert_eq!(
                roll_response(LIMITS, Some(raw)).status(),
                StatusCode::BAD_REQUEST,
                "rolls={}",
                raw
            );
        }
    }

    #[test]
    fn test_over_limit_is_bad_request() {
        assert_eq!(roll_response(LIMITS, Some("11")).status(), StatusCode::BAD_REQUEST);
        assert_eq!(roll_response(LIMITS, Some("10")).status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rolls_three() {
        let response = roll_response(LIMITS, Some("3"));
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        let rolls: Vec<i64> = serde_json::from_slice(&body).unwrap();
        assert_eq!(rolls.len(), 3);
        assert!(rolls.iter().all(|r| (1..6).contains(r)));
    }
}
