//! Default event processor

use async_trait::async_trait;
use eventpipe_core::{Event, ProcessedEvent, Processor, Result};
use std::time::Instant;

/// Passes events through unchanged while stamping processing metadata.
///
/// `processing_time_ms` is measured inside this method, so for the identity
/// transform it is effectively zero; enriching processors report their real
/// cost the same way.
#[derive(Debug, Default)]
pub struct PassthroughProcessor;

impl PassthroughProcessor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Processor for PassthroughProcessor {
    async fn process(&self, event: Event) -> Result<ProcessedEvent> {
        let start = Instant::now();

        Ok(ProcessedEvent {
            event,
            processing_time_ms: start.elapsed().as_millis() as i64,
            processed_at: chrono::Utc::now(),
        })
    }
}
