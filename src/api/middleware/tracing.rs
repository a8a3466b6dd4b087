//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// Every request gets an `INFO` span with method, URI and HTTP version.
/// Request starts are logged at `DEBUG`, responses at `INFO` with latency in
/// milliseconds, and 5xx responses at `ERROR`.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/dashboard/links/move version=HTTP/1.1}: finished processing request latency=1 ms status=303
/// INFO request{method=GET uri=/hub?device=mobile version=HTTP/1.1}: finished processing request latency=0 ms status=200
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}
