//! Pipeline coordinator
//!
//! Owns the bounded ingestion queue, the worker pool, the cancellation
//! token, and the shutdown protocol.

use crate::metrics::PipelineMetrics;
use crate::worker::{Worker, WorkerContext};
use async_channel::{Receiver, Sender};
use eventpipe_config::PipelineConfig;
use eventpipe_core::{Event, EventSink, Processor, Validator};
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// The event pipeline: ingestion queue, worker pool, metrics, shutdown.
///
/// Constructing a pipeline spawns its workers immediately, so it must happen
/// inside a Tokio runtime. The handle is cheap to share behind an `Arc`;
/// every method takes `&self`.
pub struct EventPipeline {
    queue_tx: Sender<Event>,
    queue_rx: Receiver<Event>,
    metrics: Arc<PipelineMetrics>,
    cancel: CancellationToken,
    worker_count: usize,
    start_time: Instant,
    workers: Mutex<Vec<JoinHandle<()>>>,
}

impl EventPipeline {
    /// Build the queue and start `worker_count` workers.
    pub fn new(
        sink: Arc<dyn EventSink>,
        processor: Arc<dyn Processor>,
        validator: Arc<dyn Validator>,
        metrics: Arc<PipelineMetrics>,
        config: PipelineConfig,
    ) -> Self {
        let (queue_tx, queue_rx) = async_channel::bounded(config.queue_size);
        let cancel = CancellationToken::new();

        info!(
            workers = config.worker_count,
            queue_size = config.queue_size,
            max_retries = config.max_retries,
            retry_backoff_ms = config.retry_base_backoff_ms,
            "starting pipeline"
        );

        let context = Arc::new(WorkerContext {
            validator,
            processor,
            sink,
            metrics: Arc::clone(&metrics),
            max_retries: config.max_retries,
            retry_base_backoff: config.retry_base_backoff(),
        });

        let mut handles = Vec::with_capacity(config.worker_count);
        for id in 1..=config.worker_count {
            let worker = Worker {
                id,
                queue: queue_rx.clone(),
                context: Arc::clone(&context),
                cancel: cancel.clone(),
            };
            handles.push(tokio::spawn(worker.run()));
            info!(worker_id = id, "worker started");
        }

        info!(worker_count = config.worker_count, "pipeline started");

        Self {
            queue_tx,
            queue_rx,
            metrics,
            cancel,
            worker_count: config.worker_count,
            start_time: Instant::now(),
            workers: Mutex::new(handles),
        }
    }

    /// Normalize the event and deposit it on the queue.
    ///
    /// Suspends while the queue is full; this is the backpressure point.
    /// Calling after `shutdown` has begun is a caller error: the event is
    /// logged and dropped, never a panic.
    pub async fn ingest(&self, event: Event) {
        let event = event.normalize();
        let event_id = event.id.clone();
        let event_type = event.event_type.clone();
        let source = event.source.clone();

        if self.queue_tx.send(event).await.is_err() {
            error!(
                event_id = %event_id,
                "event rejected: pipeline is shut down"
            );
            return;
        }

        debug!(
            event_id = %event_id,
            event_type = %event_type,
            source = %source,
            "event ingested"
        );
    }

    /// Drain the queue and stop every worker. Idempotent.
    ///
    /// Closing the queue alone would not wake a worker parked on an empty
    /// queue, and cancelling alone would not stop producers from creating
    /// lost work, so both happen, in that order, before joining the pool.
    /// Every event enqueued before the close reaches a terminal state by the
    /// time this returns.
    pub async fn shutdown(&self) {
        info!("initiating graceful shutdown");

        self.queue_tx.close();
        self.cancel.cancel();

        let handles: Vec<JoinHandle<()>> = {
            let mut workers = self.workers.lock().unwrap_or_else(|e| e.into_inner());
            workers.drain(..).collect()
        };
        for handle in handles {
            if let Err(err) = handle.await {
                error!(error = %err, "worker task panicked during shutdown");
            }
        }

        info!("all workers stopped, shutdown complete");
    }

    /// Pipeline metrics accessor
    pub fn metrics(&self) -> &Arc<PipelineMetrics> {
        &self.metrics
    }

    /// Events currently waiting on the queue
    pub fn queue_depth(&self) -> usize {
        self.queue_rx.len()
    }

    /// Configured queue capacity
    pub fn queue_capacity(&self) -> usize {
        // The queue is always constructed bounded
        self.queue_tx.capacity().unwrap_or(0)
    }

    /// Number of workers in the pool
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Instant the pipeline was constructed
    pub fn start_time(&self) -> Instant {
        self.start_time
    }

    /// The pipeline is healthy until its cancellation signal fires
    pub fn is_healthy(&self) -> bool {
        !self.cancel.is_cancelled()
    }

    /// Cancellation handle shared with workers and collaborators.
    ///
    /// Sinks or processors that can abandon work early may hold a clone and
    /// honor it; the pipeline never interrupts an in-flight call itself.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }
}
