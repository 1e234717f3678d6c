//! Handler error taxonomy and its HTTP mapping.
//!
//! | Variant      | Status | Body                          |
//! |--------------|--------|-------------------------------|
//! | `BadRequest` | 400    | `{"error": "<reason>"}`       |
//! | `NotFound`   | 404    | `{"error": "<Label> not found"}` |
//! | `Internal`   | 400    | `{"error": "<message>"}`      |
//!
//! `Internal` only comes from the `/error` demonstration endpoint, which has
//! always answered 400.

use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{label} not found")]
    NotFound { label: &'static str, id: u64 },

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Internal(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { label, id } => ApiError::NotFound { label, id },
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::BadRequest("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::NotFound { label: "User", id: 1 }.status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::Internal("boom".into()).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_store_error_keeps_label() {
        let err: ApiError = StoreError::NotFound { label: "Statement", id: 9 }.into();
        assert_eq!(err.to_string(), "Statement not found");
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let response = ApiError::NotFound { label: "User", id: 5 }.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value, json!({ "error": "User not found" }));
    }
}
