//! HTTP handlers for API endpoints

use crate::{
    Result,
    error::ApiError,
    types::{BatchRequest, HealthResponse, MAX_BATCH_SIZE, MetricsResponse},
};
use axum::{extract::State, http::StatusCode, response::Json};
use eventpipe_core::Event;
use eventpipe_pipeline::EventPipeline;
use std::sync::Arc;
use tracing::info;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<EventPipeline>,
}

/// Accept a single event for processing
pub async fn ingest_event(
    State(state): State<AppState>,
    Json(event): Json<Event>,
) -> StatusCode {
    info!(
        event_id = %event.id,
        event_type = %event.event_type,
        source = %event.source,
        "event accepted"
    );

    state.pipeline.ingest(event).await;
    StatusCode::ACCEPTED
}

/// Accept a batch of events for processing
pub async fn ingest_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchRequest>,
) -> Result<StatusCode> {
    if request.events.len() > MAX_BATCH_SIZE {
        return Err(ApiError::BadRequest(format!(
            "too many events (max {MAX_BATCH_SIZE})"
        )));
    }

    let count = request.events.len();
    for event in request.events {
        state.pipeline.ingest(event).await;
    }

    info!(count, "batch accepted");
    Ok(StatusCode::ACCEPTED)
}

/// Liveness check: healthy until the pipeline's shutdown signal fires
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        healthy: state.pipeline.is_healthy(),
    })
}

/// Pipeline metrics snapshot
pub async fn metrics(State(state): State<AppState>) -> Json<MetricsResponse> {
    let pipeline = &state.pipeline;
    let snapshot = pipeline.metrics().snapshot();

    Json(MetricsResponse {
        events_received: snapshot.received,
        events_processed: snapshot.processed,
        events_failed: snapshot.failed,
        average_processing_latency_ms: snapshot.avg_latency_ms,
        current_queue_depth: pipeline.queue_depth(),
        active_workers: pipeline.worker_count(),
        uptime_seconds: pipeline.start_time().elapsed().as_secs(),
        events_per_second: snapshot.events_per_second,
    })
}
