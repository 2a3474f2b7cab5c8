//! Test doubles for pipeline consumers.
//!
//! `MemorySink` is also handy as a real sink in examples and local runs.

use async_trait::async_trait;
use eventpipe_core::{EventSink, ProcessedEvent, Result};
use std::sync::Mutex;

/// Sink that appends every stored batch to an in-memory vector.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<ProcessedEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything stored so far, in store order
    pub fn events(&self) -> Vec<ProcessedEvent> {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of events stored so far
    pub fn len(&self) -> usize {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl EventSink for MemorySink {
    async fn store(&self, events: &[ProcessedEvent]) -> Result<()> {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend_from_slice(events);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventpipe_core::Event;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_memory_sink_stores_in_order() {
        let sink = MemorySink::new();

        for i in 0..3 {
            let event = Event::new("user_action", "web").id(format!("id-{i}"));
            let processed = ProcessedEvent {
                event,
                processing_time_ms: 0,
                processed_at: chrono::Utc::now(),
            };
            sink.store(&[processed]).await.unwrap();
        }

        let actual: Vec<String> = sink.events().into_iter().map(|e| e.event.id).collect();
        let expected = vec!["id-0", "id-1", "id-2"];
        assert_eq!(actual, expected);
        assert_eq!(sink.len(), 3);
    }
}
