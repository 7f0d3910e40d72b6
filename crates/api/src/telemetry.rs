use std::time::Duration;
use tower::layer::util::{Identity, Stack};
use tower::ServiceBuilder;
use tower_http::trace::HttpMakeClassifier;
use tower_http::{
    cors::CorsLayer, limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer,
};

/// Largest accepted request body. A full catalog fits comfortably.
pub const BODY_LIMIT: usize = 2 * 1024 * 1024;

type Layers = Stack<
    TimeoutLayer,
    Stack<CorsLayer, Stack<RequestBodyLimitLayer, Stack<TraceLayer<HttpMakeClassifier>, Identity>>>,
>;

/// Request spans, permissive CORS for the browser client, body cap, and a
/// per-request deadline answered with 408.
pub fn stack(timeout: Duration) -> ServiceBuilder<Layers> {
    ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT))
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(timeout))
}
