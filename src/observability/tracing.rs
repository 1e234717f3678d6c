//! Request spans and trace context.
//!
//! # Responsibilities
//! - Build the root span for every HTTP request
//! - Attach the request ID and, when present, the W3C `traceparent` trace ID
//!   so logs can be joined with traces recorded by upstream services
//!
//! # Design Decisions
//! - Header parsing is left to the OpenTelemetry `TraceContextPropagator`
//! - Malformed or all-zero `traceparent` headers are ignored, never rejected

use axum::http::{HeaderMap, Request};
use opentelemetry::propagation::TextMapPropagator;
use opentelemetry::trace::TraceContextExt;
use opentelemetry_http::HeaderExtractor;
use opentelemetry_sdk::propagation::TraceContextPropagator;
use tracing::Span;

use crate::http::request::RequestIdExt;

/// Span factory for `TraceLayer::make_span_with`.
pub fn make_request_span<B>(request: &Request<B>) -> Span {
    let trace_id = trace_id_from_headers(request.headers());

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = request.request_id().unwrap_or("-"),
        trace_id = trace_id.as_deref().unwrap_or("-"),
    )
}

/// Trace ID carried by an incoming `traceparent` header, as 32 lowercase hex
/// digits. `None` when the header is absent or invalid.
pub fn trace_id_from_headers(headers: &HeaderMap) -> Option<String> {
    let context = TraceContextPropagator::new().extract(&HeaderExtractor(headers));
    let span = context.span();
    let span_context = span.span_context();

    span_context
        .is_valid()
        .then(|| span_context.trace_id().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(traceparent: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("traceparent", HeaderValue::from_static(traceparent));
        headers
    }

    #[test]
    fn test_valid_traceparent() {
        let headers = headers("00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01");
        assert_eq!(
            trace_id_from_headers(&headers).as_deref(),
            Some("4bf92f3577b34da6a3ce929d0e0e4736")
        );
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(trace_id_from_headers(&HeaderMap::new()), None);
    }

    #[test]
    fn test_rejects_malformed() {
        for value in [
            "",
            "00-abc-00f067aa0ba902b7-01",
            "00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7",
            "00-zzf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01",
        ] {
            assert_eq!(trace_id_from_headers(&headers(value)), None, "traceparent={:?}", value);
        }
    }

    #[test]
    fn test_rejects_all_zero_trace_id() {
        let headers = headers("00-00000000000000000000000000000000-00f067aa0ba902b7-01");
        assert_eq!(trace_id_from_headers(&headers), None);
    }
}
