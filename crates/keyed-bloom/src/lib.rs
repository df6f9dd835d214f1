//! # Keyed Bloom
//!
//! Probabilistic set membership with secret-keyed hashing: "has this item
//! possibly been seen before?" with zero false negatives and a tunable false
//! positive rate, in far less memory than an exact set. Built for
//! deduplication, anti-replay and cache-admission filtering.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `parameters`: bitmap sizing and optimal hash-round count
//!   - `hash_expansion`: k probes from two keyed hashes
//!   - `Bitmap`: fixed-length bit store
//!   - `BloomFilter`: the assembled filter
//!   - `BloomConfig` / `BloomConfigBuilder`: validated construction parameters
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `MembershipApi`: Driving port (insert / query / query_and_insert)
//!   - `KeyedHasher`: Driven port (keyed 64-bit hash)
//!
//! - **Adapters Layer** (`adapters/`)
//!   - `SipHasher24Adapter`: SipHash-2-4 `KeyedHasher`
//!
//! - **Sync Layer** (`sync/`)
//!   - `SharedBloomFilter`: `RwLock`-guarded filter for multi-threaded use
//!
//! ## Security
//!
//! Every filter draws two 128-bit keys from a CSPRNG at construction. An
//! adversary who controls the inserted items but not the keys cannot
//! concentrate them onto a few bits. Keys are never exposed and are wiped on
//! drop.
//!
//! ## Invariants
//!
//! - **No false negatives**: if inserted, `query()` MUST return true
//! - **Monotonic**: bits are never cleared; no delete, merge or resize
//! - **k >= 1**, and every probe lies in `[0, bit_count)`
//!
//! ## Usage Example
//!
//! ```
//! use keyed_bloom::{compute_bitmap_size, BloomFilter};
//!
//! let bytes = compute_bitmap_size(1000, 0.01);
//! let mut filter = BloomFilter::new(bytes, 1000)?;
//!
//! filter.insert(b"item-0");
//! assert!(filter.query(b"item-0"));
//!
//! // Anti-replay: false the first time, true afterwards
//! assert!(!filter.query_and_insert(b"nonce-42"));
//! assert!(filter.query_and_insert(b"nonce-42"));
//!
//! filter.destroy();
//! # Ok::<(), keyed_bloom::FilterError>(())
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod sync;

// Re-exports for convenience
pub use adapters::SipHasher24Adapter;
pub use domain::{
    compute_bitmap_size, optimal_k, BloomConfig, BloomConfigBuilder, BloomFilter, SecretKey,
};
pub use error::{FilterError, FilterResult};
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use ports::{KeyedHasher, MembershipApi};
pub use sync::SharedBloomFilter;
