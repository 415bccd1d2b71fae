//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Request tracing for every route.
///
/// Each request gets an `INFO` span with method, URI and version. Responses
/// are logged with status and latency in milliseconds; a draw spends most of
/// that time waiting on the two upstream calls. 5xx responses are also
/// reported at `WARN` so failed draws stand out from page loads.
///
/// ```text
/// INFO request{method=GET uri=/api/tarot version=HTTP/1.1}: finished processing request latency=1840 ms status=200
/// WARN request{method=GET uri=/api/tarot version=HTTP/1.1}: response failed classification=Status code: 500 Internal Server Error latency=412 ms
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
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
