//! Domain Layer - Pure logic
//!
//! This layer contains:
//! - Parameter calculations
//! - Hash expansion (two keyed hashes → k probes)
//! - Bitmap store
//! - Core keyed Bloom filter
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Pure functions where possible

pub mod bitmap;
pub mod bloom_filter;
pub mod config;
pub mod hash_expansion;
pub mod parameters;
pub mod secret_key;

pub use bitmap::Bitmap;
pub use bloom_filter::BloomFilter;
pub use config::{BloomConfig, BloomConfigBuilder};
pub use hash_expansion::{BaseHashes, ProbePositions, EXPANSION_MODULUS};
pub use parameters::{calculate_fpr, compute_bitmap_size, fpr_from_fill, optimal_k};
pub use secret_key::{SecretKey, KEY_BYTES};
