use crate::{DateTime, Json};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// An input record submitted by a producer for processing.
///
/// Producers may leave `id` and `timestamp` unset; [`Event::normalize`] fills
/// them in at ingest. `event_type` and `source` are required by the basic
/// validator but tolerated as empty at the decoding layer so that invalid
/// events still flow through the pipeline and are counted as failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Setters)]
#[setters(strip_option, into)]
pub struct Event {
    /// Unique event identifier (UUID string; generated when empty)
    #[serde(default)]
    pub id: String,
    /// Event type, e.g. "user_action"
    #[serde(rename = "type", default)]
    pub event_type: String,
    /// Origin of the event, e.g. "web"
    #[serde(default)]
    pub source: String,
    /// Event timestamp (defaulted to now at ingest when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime>,
    /// User or system that triggered the event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Arbitrary event payload
    #[serde(default)]
    pub data: HashMap<String, Json>,
}

impl Event {
    /// Create a new event with a generated id and current timestamp
    pub fn new(event_type: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            event_type: event_type.into(),
            source: source.into(),
            timestamp: Some(chrono::Utc::now()),
            user_id: None,
            data: HashMap::new(),
        }
    }

    /// Add a payload entry
    pub fn with_data(mut self, key: impl Into<String>, value: Json) -> Self {
        self.data.insert(key.into(), value);
        self
    }

    /// Ensure id and timestamp are set.
    ///
    /// Applied by the pipeline on every ingested event, so downstream stages
    /// can rely on both being present.
    pub fn normalize(mut self) -> Self {
        if self.id.is_empty() {
            self.id = Uuid::new_v4().to_string();
        }
        if self.timestamp.is_none() {
            self.timestamp = Some(chrono::Utc::now());
        }
        self
    }
}

/// An event augmented with processing metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedEvent {
    #[serde(flatten)]
    pub event: Event,
    /// Time spent inside the processor, in milliseconds
    pub processing_time_ms: i64,
    /// Instant the processor finished with the event
    pub processed_at: DateTime,
}
