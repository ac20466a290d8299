use crate::{app_state::AppState, handlers, types::error::HealthError};
use axum::{
    Router,
    response::{IntoResponse, Response},
    routing::get,
};
use std::any::Any;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

/// Create the application router with all routes and middleware
///
/// This function is used by both main.rs and integration tests to ensure
/// the same server configuration is used in both production and tests.
pub fn create_app(app_state: AppState) -> Router {
    use handlers::{freshness, not_found, usage};

    Router::new()
        .route("/buckets/{bucket_name}/freshness", get(freshness))
        .route("/buckets/{bucket_name}/usage", get(usage))
        // Fallback for 404 Not Found
        .fallback(not_found)
        // Add shared state
        .with_state(app_state)
        // Map panics to the Unexpected taxonomy entry instead of a dropped
        // connection
        .layer(CatchPanicLayer::custom(handle_panic))
        // Add tracing
        .layer(TraceLayer::new_for_http())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "request handler panicked".to_string()
    };

    tracing::error!("Handler panicked: {}", detail);
    HealthError::Unexpected(detail).into_response()
}
