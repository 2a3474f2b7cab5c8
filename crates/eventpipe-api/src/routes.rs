//! API route definitions and setup

use crate::{
    handlers::{AppState, health, ingest_batch, ingest_event, metrics},
    middleware::{logging_middleware, request_id_middleware},
};
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/events", post(ingest_event))
        .route("/events/batch", post(ingest_batch))
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
