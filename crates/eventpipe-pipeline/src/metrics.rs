//! Pipeline metrics
//!
//! Atomic counters for the hot path. All operations use relaxed ordering;
//! values are eventually consistent, not real-time.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Running totals for the pipeline.
///
/// Workers are the only writers and touch at most three counters per event,
/// never holding a lock. Readers (the metrics endpoint) never block the hot
/// path. The ratio of `total_latency_ms` to `processed` may be momentarily
/// skewed between two loads; the derived average is a monitoring
/// approximation.
#[derive(Debug)]
pub struct PipelineMetrics {
    /// Events pulled off the queue by a worker
    received: AtomicU64,
    /// Events that reached DONE (stored durably)
    processed: AtomicU64,
    /// Events that reached FAILED (validation, processing, or exhausted retries)
    failed: AtomicU64,
    /// Sum of end-to-end latencies of successful events, in milliseconds
    total_latency_ms: AtomicU64,
    /// Construction instant, for throughput calculations
    start_time: Instant,
}

impl PipelineMetrics {
    /// Create a new metrics instance with all counters at zero
    pub fn new() -> Self {
        Self {
            received: AtomicU64::new(0),
            processed: AtomicU64::new(0),
            failed: AtomicU64::new(0),
            total_latency_ms: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record an event dequeued by a worker
    #[inline]
    pub fn inc_received(&self) {
        self.received.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an event stored durably
    #[inline]
    pub fn inc_processed(&self) {
        self.processed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a terminally failed event
    #[inline]
    pub fn inc_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Add an end-to-end latency sample (successes only)
    #[inline]
    pub fn add_latency(&self, ms: u64) {
        self.total_latency_ms.fetch_add(ms, Ordering::Relaxed);
    }

    /// Get events received count
    #[inline]
    pub fn received(&self) -> u64 {
        self.received.load(Ordering::Relaxed)
    }

    /// Get events processed count
    #[inline]
    pub fn processed(&self) -> u64 {
        self.processed.load(Ordering::Relaxed)
    }

    /// Get events failed count
    #[inline]
    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    /// Average end-to-end latency in milliseconds, 0 when nothing processed
    pub fn avg_latency_ms(&self) -> f64 {
        let processed = self.processed.load(Ordering::Relaxed);
        if processed == 0 {
            return 0.0;
        }
        let total = self.total_latency_ms.load(Ordering::Relaxed);
        total as f64 / processed as f64
    }

    /// Processed events per second since construction, 0 when no time elapsed
    pub fn events_per_second(&self) -> f64 {
        let secs = self.start_time.elapsed().as_secs_f64();
        if secs <= 0.0 {
            return 0.0;
        }
        self.processed() as f64 / secs
    }

    /// Instant this metrics instance was created
    pub fn start_time(&self) -> Instant {
        self.start_time
    }

    /// Get a point-in-time copy of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            received: self.received.load(Ordering::Relaxed),
            processed: self.processed.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            avg_latency_ms: self.avg_latency_ms(),
            events_per_second: self.events_per_second(),
        }
    }
}

impl Default for PipelineMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time view of the pipeline counters
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MetricsSnapshot {
    pub received: u64,
    pub processed: u64,
    pub failed: u64,
    pub avg_latency_ms: f64,
    pub events_per_second: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_metrics_new() {
        let actual = PipelineMetrics::new();
        assert_eq!(actual.received(), 0);
        assert_eq!(actual.processed(), 0);
        assert_eq!(actual.failed(), 0);
        assert_eq!(actual.avg_latency_ms(), 0.0);
    }

    #[test]
    fn test_metrics_increments() {
        let fixture = PipelineMetrics::new();
        fixture.inc_received();
        fixture.inc_received();
        fixture.inc_processed();
        fixture.inc_failed();

        assert_eq!(fixture.received(), 2);
        assert_eq!(fixture.processed(), 1);
        assert_eq!(fixture.failed(), 1);
    }

    #[test]
    fn test_avg_latency_zero_when_nothing_processed() {
        let fixture = PipelineMetrics::new();
        fixture.add_latency(500);
        assert_eq!(fixture.avg_latency_ms(), 0.0);
    }

    #[test]
    fn test_avg_latency() {
        let fixture = PipelineMetrics::new();
        fixture.add_latency(10);
        fixture.add_latency(30);
        fixture.inc_processed();
        fixture.inc_processed();

        let actual = fixture.avg_latency_ms();
        let expected = 20.0;
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_events_per_second_positive_after_processing() {
        let fixture = PipelineMetrics::new();
        fixture.inc_processed();
        std::thread::sleep(std::time::Duration::from_millis(1));
        assert!(fixture.events_per_second() > 0.0);
    }

    #[test]
    fn test_snapshot() {
        let fixture = PipelineMetrics::new();
        fixture.inc_received();
        fixture.inc_processed();
        fixture.add_latency(5);

        let actual = fixture.snapshot();
        assert_eq!(actual.received, 1);
        assert_eq!(actual.processed, 1);
        assert_eq!(actual.failed, 0);
        assert_eq!(actual.avg_latency_ms, 5.0);
    }

    #[test]
    fn test_concurrent_access() {
        use std::sync::Arc;
        use std::thread;

        let metrics = Arc::new(PipelineMetrics::new());
        let mut handles = vec![];

        for _ in 0..4 {
            let m = Arc::clone(&metrics);
            handles.push(thread::spawn(move || {
                for _ in 0..1000 {
                    m.inc_received();
                    m.inc_processed();
                    m.add_latency(1);
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(metrics.received(), 4000);
        assert_eq!(metrics.processed(), 4000);
        assert_eq!(metrics.avg_latency_ms(), 1.0);
    }
}
