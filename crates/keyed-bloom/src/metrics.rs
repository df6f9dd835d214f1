//! Metrics hooks for Bloom filter operations
//!
//! Counters for filter lifecycle and membership traffic. Attach a recorder
//! with [`crate::BloomFilter::with_metrics`].
//!
//! ## Usage
//!
//! ```
//! use keyed_bloom::{BloomFilter, Metrics};
//! use std::sync::Arc;
//!
//! let metrics = Arc::new(Metrics::new());
//! let mut filter = BloomFilter::new(1024, 100).unwrap().with_metrics(metrics.clone());
//! filter.insert(b"a");
//! filter.query(b"a");
//!
//! let snapshot = metrics.snapshot();
//! assert_eq!(snapshot.inserts, 1);
//! assert_eq!(snapshot.queries_positive, 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics collector for Bloom filter operations
///
/// Thread-safe counters; one collector may be shared by many filters.
#[derive(Debug, Default)]
pub struct Metrics {
    /// Filters constructed
    pub filters_created: AtomicU64,
    /// Filters released
    pub filters_freed: AtomicU64,
    /// Bitmap bytes currently held by live filters
    pub bytes_allocated: AtomicU64,
    /// `insert` calls
    pub inserts: AtomicU64,
    /// `query` calls
    pub queries: AtomicU64,
    /// `query` calls that answered "probably present"
    pub queries_positive: AtomicU64,
    /// `query_and_insert` calls
    pub query_and_inserts: AtomicU64,
    /// `query_and_insert` calls that found the item already present
    pub query_and_insert_hits: AtomicU64,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            filters_created: self.filters_created.load(Ordering::Relaxed),
            filters_freed: self.filters_freed.load(Ordering::Relaxed),
            bytes_allocated: self.bytes_allocated.load(Ordering::Relaxed),
            inserts: self.inserts.load(Ordering::Relaxed),
            queries: self.queries.load(Ordering::Relaxed),
            queries_positive: self.queries_positive.load(Ordering::Relaxed),
            query_and_inserts: self.query_and_inserts.load(Ordering::Relaxed),
            query_and_insert_hits: self.query_and_insert_hits.load(Ordering::Relaxed),
        }
    }

    /// Ratio of positive queries to total queries
    ///
    /// Includes true positives; equals the false positive rate only when
    /// every probe is for an absent item.
    pub fn observed_positive_rate(&self) -> f64 {
        let total = self.queries.load(Ordering::Relaxed);
        let positive = self.queries_positive.load(Ordering::Relaxed);
        if total > 0 {
            positive as f64 / total as f64
        } else {
            0.0
        }
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub filters_created: u64,
    pub filters_freed: u64,
    pub bytes_allocated: u64,
    pub inserts: u64,
    pub queries: u64,
    pub queries_positive: u64,
    pub query_and_inserts: u64,
    pub query_and_insert_hits: u64,
}

/// Trait for custom metrics recording implementations
///
/// Implement this to forward to Prometheus, StatsD or OpenTelemetry.
pub trait MetricsRecorder: Send + Sync {
    /// Record filter construction
    fn record_filter_created(&self, bitmap_bytes: usize, hash_rounds: usize);

    /// Record filter release
    fn record_filter_freed(&self, bitmap_bytes: usize);

    /// Record an insert
    fn record_insert(&self);

    /// Record a query and its answer
    fn record_query(&self, found: bool);

    /// Record a query-and-insert and its answer
    fn record_query_and_insert(&self, was_present: bool);
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Debug, Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_filter_created(&self, _: usize, _: usize) {}
    fn record_filter_freed(&self, _: usize) {}
    fn record_insert(&self) {}
    fn record_query(&self, _: bool) {}
    fn record_query_and_insert(&self, _: bool) {}
}

impl MetricsRecorder for Metrics {
    fn record_filter_created(&self, bitmap_bytes: usize, _hash_rounds: usize) {
        self.filters_created.fetch_add(1, Ordering::Relaxed);
        self.bytes_allocated
            .fetch_add(bitmap_bytes as u64, Ordering::Relaxed);
    }

    fn record_filter_freed(&self, bitmap_bytes: usize) {
        self.filters_freed.fetch_add(1, Ordering::Relaxed);
        self.bytes_allocated
            .fetch_sub(bitmap_bytes as u64, Ordering::Relaxed);
    }

    fn record_insert(&self) {
        self.inserts.fetch_add(1, Ordering::Relaxed);
    }

    fn record_query(&self, found: bool) {
        self.queries.fetch_add(1, Ordering::Relaxed);
        if found {
            self.queries_positive.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn record_query_and_insert(&self, was_present: bool) {
        self.query_and_inserts.fetch_add(1, Ordering::Relaxed);
        if was_present {
            self.query_and_insert_hits.fetch_add(1, Ordering::Relaxed);
        }
    }
}
