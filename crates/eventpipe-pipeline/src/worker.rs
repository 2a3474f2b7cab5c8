//! Pipeline worker
//!
//! Each worker owns a receive handle on the shared queue and drives every
//! dequeued event through the validate → process → store state machine.

use crate::metrics::PipelineMetrics;
use async_channel::Receiver;
use eventpipe_core::{Event, EventSink, Processor, Validator};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Collaborators and tuning shared by every worker in the pool.
pub(crate) struct WorkerContext {
    pub validator: Arc<dyn Validator>,
    pub processor: Arc<dyn Processor>,
    pub sink: Arc<dyn EventSink>,
    pub metrics: Arc<PipelineMetrics>,
    /// Total store attempts per event
    pub max_retries: u32,
    /// Attempt k sleeps k times this before attempt k+1
    pub retry_base_backoff: Duration,
}

pub(crate) struct Worker {
    pub id: usize,
    pub queue: Receiver<Event>,
    pub context: Arc<WorkerContext>,
    pub cancel: CancellationToken,
}

impl Worker {
    /// Consume events until the queue is closed and empty.
    ///
    /// Cancellation wakes a worker blocked on an empty queue but does not
    /// abandon queued events: the drain loop keeps consuming until the closed
    /// queue runs dry. Shutdown closes the queue before firing cancellation,
    /// so the drain always terminates.
    pub async fn run(self) {
        loop {
            tokio::select! {
                received = self.queue.recv() => match received {
                    Ok(event) => {
                        self.context.metrics.inc_received();
                        self.handle_event(event).await;
                    }
                    Err(_) => {
                        info!(worker_id = self.id, reason = "queue closed", "worker exiting");
                        return;
                    }
                },
                _ = self.cancel.cancelled() => {
                    while let Ok(event) = self.queue.recv().await {
                        self.context.metrics.inc_received();
                        self.handle_event(event).await;
                    }
                    info!(worker_id = self.id, reason = "shutdown signal", "worker exiting");
                    return;
                }
            }
        }
    }

    /// Drive one event to a terminal state.
    ///
    /// Exactly one of `processed` / `failed` is incremented per call; latency
    /// is recorded for successes only, measured from the moment this worker
    /// began handling the event.
    async fn handle_event(&self, event: Event) {
        let event_id = event.id.clone();
        let event_type = event.event_type.clone();
        let source = event.source.clone();
        let started = Instant::now();

        // Validate
        if let Err(err) = self.context.validator.validate(&event).await {
            warn!(
                worker_id = self.id,
                event_id = %event_id,
                event_type = %event_type,
                source = %source,
                error = %err,
                "validation failed"
            );
            self.context.metrics.inc_failed();
            return;
        }

        // Process
        let processed = match self.context.processor.process(event).await {
            Ok(processed) => processed,
            Err(err) => {
                error!(
                    worker_id = self.id,
                    event_id = %event_id,
                    error = %err,
                    "processing failed"
                );
                self.context.metrics.inc_failed();
                return;
            }
        };

        // Store with bounded retries and linear backoff
        let batch = [processed];
        let max_attempts = self.context.max_retries;
        let mut attempt = 1u32;
        loop {
            match self.context.sink.store(&batch).await {
                Ok(()) => break,
                Err(err) if attempt < max_attempts => {
                    warn!(
                        worker_id = self.id,
                        event_id = %event_id,
                        attempt,
                        max_attempts,
                        error = %err,
                        "storage attempt failed, will retry"
                    );
                    tokio::time::sleep(self.context.retry_base_backoff * attempt).await;
                    attempt += 1;
                }
                Err(err) => {
                    error!(
                        worker_id = self.id,
                        event_id = %event_id,
                        attempts = max_attempts,
                        error = %err,
                        "storage permanently failed"
                    );
                    self.context.metrics.inc_failed();
                    return;
                }
            }
        }

        let latency_ms = started.elapsed().as_millis() as u64;
        self.context.metrics.add_latency(latency_ms);
        self.context.metrics.inc_processed();

        debug!(
            worker_id = self.id,
            event_id = %event_id,
            event_type = %event_type,
            source = %source,
            latency_ms,
            "event processed"
        );
    }
}
