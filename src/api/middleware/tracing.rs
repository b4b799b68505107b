//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

/// Tracing layer with the product API's log levels applied.
pub type HttpTraceLayer = TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    DefaultMakeSpan,
    DefaultOnRequest,
    DefaultOnResponse,
>;

/// Creates a tracing middleware for HTTP requests.
///
/// - Span per request at `INFO` with method, URI and version
/// - Request start at `DEBUG`
/// - Response status and latency (ms) at `INFO`
/// - 5xx responses additionally reported at `ERROR`
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/api/v1/product/2 version=HTTP/1.1}: finished processing request latency=0 ms status=200
/// ERROR request{method=GET uri=/api/v1/product version=HTTP/1.1}: response failed classification=Status code: 500 Internal Server Error latency=0 ms
/// ```
pub fn layer() -> HttpTraceLayer {
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
