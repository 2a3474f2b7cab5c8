use crate::{Event, ProcessedEvent, Result};
use async_trait::async_trait;

/// Rejects malformed events before any work is spent on them.
///
/// A validation failure is terminal for the event; the pipeline counts it as
/// failed and never retries.
#[async_trait]
pub trait Validator: Send + Sync {
    async fn validate(&self, event: &Event) -> Result<()>;
}

/// Transforms an event into its processed form.
///
/// Implementations must not block indefinitely and must stamp
/// `processed_at` and `processing_time_ms` themselves. Processor errors are
/// terminal, like validation failures.
#[async_trait]
pub trait Processor: Send + Sync {
    async fn process(&self, event: Event) -> Result<ProcessedEvent>;
}

/// Durable destination for processed events.
///
/// A `store` call is transactional: either every event in the batch is
/// durable or none are. Callers retrying a failed call re-submit the full
/// batch. Implementations must tolerate concurrent calls from many workers.
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn store(&self, events: &[ProcessedEvent]) -> Result<()>;
}
