//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

/// Access log layer for the whole router.
///
/// Spans are `INFO` and carry method, path and version. A search may hold the
/// connection for most of a minute, so the "started" event is only emitted
/// at `DEBUG`; the response event at `INFO` carries status and latency in
/// milliseconds. Server errors are additionally logged at `WARN`.
///
/// Headers are never recorded: they carry session tokens.
///
/// ```text
/// INFO request{method=POST uri=/api/search version=HTTP/1.1}: finished processing request latency=18342 ms status=200
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(
            DefaultMakeSpan::new()
                .level(Level::INFO)
                .include_headers(false),
        )
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::WARN)
                .latency_unit(LatencyUnit::Millis),
        )
}
