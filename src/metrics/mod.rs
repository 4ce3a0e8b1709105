//! Basic metrics instrumentation for the submission pipeline.
//!
//! Provides counters for submission attempts and their outcomes, plus
//! duration tracking for the HTTP requests they issue.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector for tracking form submissions.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Submit intents received, blocked or not
    submissions_total: Arc<AtomicU64>,

    /// Submit intents stopped by the validation gate
    submissions_blocked: Arc<AtomicU64>,

    /// Resolved with a status in [200, 400) and no redirect
    submissions_delivered: Arc<AtomicU64>,

    /// Resolved with a status in [200, 400) after a redirect
    submissions_redirected: Arc<AtomicU64>,

    /// Resolved with a status outside [200, 400)
    submissions_rejected: Arc<AtomicU64>,

    /// Never resolved to a response
    submissions_failed: Arc<AtomicU64>,

    /// Total number of HTTP requests made
    http_requests_total: Arc<AtomicU64>,

    /// Total duration of all HTTP requests in milliseconds
    http_duration_total_ms: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            submissions_total: Arc::new(AtomicU64::new(0)),
            submissions_blocked: Arc::new(AtomicU64::new(0)),
            submissions_delivered: Arc::new(AtomicU64::new(0)),
            submissions_redirected: Arc::new(AtomicU64::new(0)),
            submissions_rejected: Arc::new(AtomicU64::new(0)),
            submissions_failed: Arc::new(AtomicU64::new(0)),
            http_requests_total: Arc::new(AtomicU64::new(0)),
            http_duration_total_ms: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a submit intent.
    pub fn record_submission(&self) {
        self.submissions_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a submit intent stopped by validation.
    pub fn record_blocked(&self) {
        self.submissions_blocked.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_delivered(&self) {
        self.submissions_delivered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_redirected(&self) {
        self.submissions_redirected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected(&self) {
        self.submissions_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failed(&self) {
        self.submissions_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an HTTP request with duration.
    pub fn record_http_request(&self, duration: Duration) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn submissions_total(&self) -> u64 {
        self.submissions_total.load(Ordering::Relaxed)
    }

    pub fn submissions_blocked(&self) -> u64 {
        self.submissions_blocked.load(Ordering::Relaxed)
    }

    pub fn submissions_delivered(&self) -> u64 {
        self.submissions_delivered.load(Ordering::Relaxed)
    }

    pub fn submissions_redirected(&self) -> u64 {
        self.submissions_redirected.load(Ordering::Relaxed)
    }

    pub fn submissions_rejected(&self) -> u64 {
        self.submissions_rejected.load(Ordering::Relaxed)
    }

    pub fn submissions_failed(&self) -> u64 {
        self.submissions_failed.load(Ordering::Relaxed)
    }

    /// Get total HTTP requests.
    pub fn http_requests_total(&self) -> u64 {
        self.http_requests_total.load(Ordering::Relaxed)
    }

    /// Get total HTTP duration in milliseconds.
    pub fn http_duration_total_ms(&self) -> u64 {
        self.http_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average HTTP request duration in milliseconds.
    pub fn http_duration_avg_ms(&self) -> f64 {
        let total = self.http_duration_total_ms.load(Ordering::Relaxed);
        let count = self.http_requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            submissions_total: self.submissions_total(),
            submissions_blocked: self.submissions_blocked(),
            submissions_delivered: self.submissions_delivered(),
            submissions_redirected: self.submissions_redirected(),
            submissions_rejected: self.submissions_rejected(),
            submissions_failed: self.submissions_failed(),
            http_requests_total: self.http_requests_total(),
            http_duration_avg_ms: self.http_duration_avg_ms(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub submissions_total: u64,
    pub submissions_blocked: u64,
    pub submissions_delivered: u64,
    pub submissions_redirected: u64,
    pub submissions_rejected: u64,
    pub submissions_failed: u64,
    pub http_requests_total: u64,
    pub http_duration_avg_ms: f64,
}

/// Helper for timing HTTP requests.
pub struct HttpTimer {
    start: Instant,
    metrics: Metrics,
}

impl HttpTimer {
    /// Start timing an HTTP request.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) -> Duration {
        let duration = self.start.elapsed();
        self.metrics.record_http_request(duration);
        duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new();
        assert_eq!(metrics.submissions_total(), 0);
        assert_eq!(metrics.http_requests_total(), 0);
        assert_eq!(metrics.http_duration_avg_ms(), 0.0);
    }

    #[test]
    fn test_average_duration() {
        let metrics = Metrics::new();
        metrics.record_http_request(Duration::from_millis(100));
        metrics.record_http_request(Duration::from_millis(200));
        assert_eq!(metrics.http_requests_total(), 2);
        assert_eq!(metrics.http_duration_total_ms(), 300);
        assert_eq!(metrics.http_duration_avg_ms(), 150.0);
    }

    #[test]
    fn test_summary() {
        let metrics = Metrics::new();
        metrics.record_submission();
        metrics.record_submission();
        metrics.record_blocked();
        metrics.record_rejected();

        let summary = metrics.summary();
        assert_eq!(summary.submissions_total, 2);
        assert_eq!(summary.submissions_blocked, 1);
        assert_eq!(summary.submissions_rejected, 1);
        assert_eq!(summary.submissions_delivered, 0);
    }

    #[test]
    fn test_http_timer() {
        let metrics = Metrics::new();
        let timer = HttpTimer::new(metrics.clone());
        thread::sleep(Duration::from_millis(10));
        let elapsed = timer.complete();

        assert_eq!(metrics.http_requests_total(), 1);
        assert!(elapsed >= Duration::from_millis(10));
        assert!(metrics.http_duration_total_ms() >= 10);
    }

    #[test]
    fn test_clones_share_counters() {
        let metrics = Metrics::new();
        let other = metrics.clone();

        let handle = thread::spawn(move || {
            for _ in 0..100 {
                other.record_submission();
            }
        });
        handle.join().unwrap();

        assert_eq!(metrics.submissions_total(), 100);
    }
}
