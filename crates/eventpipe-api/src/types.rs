//! API request and response types

use eventpipe_core::Event;
use serde::{Deserialize, Serialize};

/// Maximum number of events accepted in one batch request
pub const MAX_BATCH_SIZE: usize = 100;

/// Batched ingestion request
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchRequest {
    pub events: Vec<Event>,
}

/// Liveness response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub healthy: bool,
}

/// Pipeline observability snapshot
#[derive(Debug, Serialize, Deserialize)]
pub struct MetricsResponse {
    pub events_received: u64,
    pub events_processed: u64,
    pub events_failed: u64,
    pub average_processing_latency_ms: f64,
    pub current_queue_depth: usize,
    pub active_workers: usize,
    pub uptime_seconds: u64,
    pub events_per_second: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_batch_request_deserialization() {
        let fixture = r#"{"events": [{"type": "user_action", "source": "web"}]}"#;
        let actual: BatchRequest = serde_json::from_str(fixture).unwrap();
        assert_eq!(actual.events.len(), 1);
        assert_eq!(actual.events[0].event_type, "user_action");
    }

    #[test]
    fn test_health_response_serialization() {
        let fixture = HealthResponse { healthy: true };
        let actual = serde_json::to_string(&fixture).unwrap();
        assert_eq!(actual, r#"{"healthy":true}"#);
    }
}
