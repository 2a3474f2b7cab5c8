//! # Eventpipe Pipeline
//!
//! The in-process event pipeline: a bounded ingestion queue feeding a fixed
//! pool of workers, each driving events through the
//! validate → process → store state machine with bounded retries.
//!
//! # Architecture
//!
//! ```text
//! Ingest(event) ──→ bounded queue ──→ [worker 1..N] ──→ EventSink
//!                                        │
//!                                        └──→ PipelineMetrics (atomics)
//! ```
//!
//! # Key Design
//!
//! - **Bounded MPMC queue**: `async_channel` senders suspend when the queue
//!   is full, and `close()` switches it to drain-only
//! - **Two-phase shutdown**: close the queue, fire the cancellation token,
//!   then join every worker; events already queued reach a terminal state
//! - **Lock-free metrics**: atomic counters only on the hot path
//! - **Collaborator traits**: validator, processor, and sink are swappable
//!   contracts from `eventpipe-core`

pub mod metrics;
pub mod pipeline;
pub mod processor;
pub mod testing;
pub mod validator;

mod worker;

pub use metrics::{MetricsSnapshot, PipelineMetrics};
pub use pipeline::EventPipeline;
pub use processor::PassthroughProcessor;
pub use validator::BasicValidator;

// Re-export the contracts the pipeline is built around
pub use eventpipe_config::PipelineConfig;
pub use eventpipe_core::{Event, EventSink, ProcessedEvent, Processor, Validator};
