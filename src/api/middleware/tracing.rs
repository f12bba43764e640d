//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// Opens an `INFO` span per request (method, URI, version) and logs the status
/// and latency in milliseconds when the response is sent.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/articles version=HTTP/1.1}: finished processing request latency=0 ms status=201
/// INFO request{method=GET uri=/journalists/9/articles version=HTTP/1.1}: finished processing request latency=0 ms status=404
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
