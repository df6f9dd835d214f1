//! Core keyed Bloom filter
//!
//! INVARIANTS:
//! - No false negatives: once inserted, `query` returns true until the filter drops
//! - Bits only transition 0 → 1; `bit_count` and `k` never change
//! - `k >= 1` and every probe lies in `[0, bit_count)`
//! - Each filter owns two freshly sampled keys, never shared with another filter

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::fmt;
use std::sync::Arc;

use super::bitmap::Bitmap;
use super::config::BloomConfig;
use super::hash_expansion::{BaseHashes, ProbePositions};
use super::parameters::{calculate_fpr, fpr_from_fill, optimal_k};
use super::secret_key::SecretKey;
use crate::adapters::SipHasher24Adapter;
use crate::error::FilterResult;
use crate::metrics::{MetricsRecorder, NoOpMetrics};
use crate::ports::{KeyedHasher, MembershipApi};

/// Keyed Bloom filter for probabilistic membership testing
///
/// Probe positions come from two keyed hashes under secret per-filter keys,
/// so an adversary choosing the items cannot predict which bits they hit.
///
/// The filter is not `Clone`: a copy would share keys with its source. For
/// concurrent use wrap it in [`crate::SharedBloomFilter`].
pub struct BloomFilter<H: KeyedHasher = SipHasher24Adapter> {
    /// Bit array storing the filter state
    bitmap: Bitmap,
    /// Number of hash rounds (k)
    k: usize,
    /// Load the filter was sized for (n)
    expected_items: usize,
    /// Hasher bound to key_a
    hasher_a: H,
    /// Hasher bound to key_b
    hasher_b: H,
    /// Inserts that may have added a new item
    insertions: u64,
    metrics: Arc<dyn MetricsRecorder>,
}

impl BloomFilter<SipHasher24Adapter> {
    /// Create a SipHash-2-4 filter keyed from the operating system RNG
    ///
    /// # Arguments
    /// * `bitmap_bytes` - Bitmap size in bytes (see [`crate::compute_bitmap_size`])
    /// * `expected_items` - Expected number of items (n)
    ///
    /// # Errors
    /// [`crate::FilterError::SizeOverflow`] if `bitmap_bytes * 8` overflows,
    /// [`crate::FilterError::AllocationFailed`] if the bitmap cannot be allocated.
    ///
    /// # Panics
    /// If the operating system RNG fails to produce key material. Use
    /// [`Self::with_rng`] to supply a different source.
    pub fn new(bitmap_bytes: usize, expected_items: usize) -> FilterResult<Self> {
        Self::construct(bitmap_bytes, expected_items, &mut OsRng)
    }

    /// Create a SipHash-2-4 filter keyed from a caller-supplied CSPRNG
    pub fn with_rng<R: RngCore + CryptoRng + ?Sized>(
        bitmap_bytes: usize,
        expected_items: usize,
        rng: &mut R,
    ) -> FilterResult<Self> {
        Self::construct(bitmap_bytes, expected_items, rng)
    }

    /// Create a SipHash-2-4 filter from a validated config
    pub fn from_config(config: &BloomConfig) -> FilterResult<Self> {
        config.validate()?;
        Self::new(config.bitmap_bytes, config.expected_items)
    }
}

impl<H: KeyedHasher> BloomFilter<H> {
    /// Create a filter with an arbitrary keyed hash
    ///
    /// Validates the size before allocating, then draws exactly two keys
    /// from `rng`.
    pub fn construct<R: RngCore + CryptoRng + ?Sized>(
        bitmap_bytes: usize,
        expected_items: usize,
        rng: &mut R,
    ) -> FilterResult<Self> {
        let bitmap = Bitmap::with_bytes(bitmap_bytes).inspect_err(|e| {
            tracing::warn!(bitmap_bytes, expected_items, error = %e, "Bloom filter construction rejected");
        })?;

        let bit_count = bitmap.bit_count();
        let k = optimal_k(bit_count, expected_items);

        let key_a = SecretKey::generate(rng);
        let key_b = SecretKey::generate(rng);

        if bit_count == 0 {
            tracing::warn!(
                expected_items,
                "Zero-sized Bloom filter: every query will report present"
            );
        }
        tracing::debug!(
            bitmap_bytes,
            bit_count,
            hash_rounds = k,
            expected_items,
            "Bloom filter constructed"
        );

        Ok(Self {
            bitmap,
            k,
            expected_items,
            hasher_a: H::with_key(&key_a),
            hasher_b: H::with_key(&key_b),
            insertions: 0,
            metrics: Arc::new(NoOpMetrics),
        })
    }

    /// Attach a metrics recorder
    ///
    /// The recorder sees this filter's creation immediately and its release
    /// on drop. A recorder replaced by a later call sees the release at
    /// that point, so each recorder stays balanced.
    pub fn with_metrics(mut self, recorder: Arc<dyn MetricsRecorder>) -> Self {
        let bytes = self.bitmap.byte_len();
        self.metrics.record_filter_freed(bytes);
        recorder.record_filter_created(bytes, self.k);
        self.metrics = recorder;
        self
    }

    /// Release the filter and its bitmap
    ///
    /// Equivalent to dropping it; ownership rules out use afterwards.
    pub fn destroy(self) {
        tracing::debug!(bit_count = self.bitmap.bit_count(), "Bloom filter destroyed");
    }

    /// Probe positions for `item`, or `None` for a zero-sized bitmap
    fn probes(&self, item: &[u8]) -> Option<ProbePositions> {
        let bit_count = self.bitmap.bit_count();
        if bit_count == 0 {
            return None;
        }
        let base = BaseHashes::compute(&self.hasher_a, &self.hasher_b, item);
        Some(base.positions(self.k, bit_count))
    }

    /// Insert an item into the filter
    ///
    /// After insertion, `query(item)` is guaranteed to return true.
    pub fn insert(&mut self, item: &[u8]) {
        if let Some(positions) = self.probes(item) {
            for pos in positions {
                self.bitmap.set_bit(pos);
            }
        }
        self.insertions += 1;
        self.metrics.record_insert();
    }

    /// Test if an item might be in the filter
    ///
    /// Returns:
    /// - `true` if the item might be in the set (could be a false positive)
    /// - `false` if the item is definitely NOT in the set
    ///
    /// A zero-sized filter always answers `true`.
    pub fn query(&self, item: &[u8]) -> bool {
        let found = match self.probes(item) {
            Some(mut positions) => positions.all(|pos| self.bitmap.test_bit(pos)),
            None => true,
        };
        self.metrics.record_query(found);
        found
    }

    /// Test membership without early exit
    ///
    /// Reads every probe position and folds with a bitwise AND, so timing
    /// does not reveal which probe missed. Same answer as [`Self::query`].
    pub fn query_constant_time(&self, item: &[u8]) -> bool {
        let found = match self.probes(item) {
            Some(positions) => {
                let mut result: u8 = 1;
                for pos in positions {
                    result &= self.bitmap.test_bit(pos) as u8;
                }
                result == 1
            }
            None => true,
        };
        self.metrics.record_query(found);
        found
    }

    /// Insert an item and report whether it appeared present beforehand
    ///
    /// Every probed bit is set when this returns, whatever the answer.
    /// Returns `true` iff all probed bits were already set before the call;
    /// `false` if this call set at least one new bit. This is "was it a
    /// member", not "did this call add anything".
    pub fn query_and_insert(&mut self, item: &[u8]) -> bool {
        let was_present = match self.probes(item) {
            Some(positions) => {
                let mut found = true;
                for pos in positions {
                    found &= self.bitmap.test_and_set_bit(pos);
                }
                found
            }
            None => true,
        };
        if !was_present {
            self.insertions += 1;
        }
        self.metrics.record_query_and_insert(was_present);
        was_present
    }

    /// Total addressable bits (m)
    pub fn bit_count(&self) -> u64 {
        self.bitmap.bit_count()
    }

    /// Bitmap size in bytes
    pub fn bitmap_bytes(&self) -> usize {
        self.bitmap.byte_len()
    }

    /// Number of hash rounds per operation (k)
    pub fn hash_rounds(&self) -> usize {
        self.k
    }

    /// Load the filter was sized for (n)
    pub fn expected_items(&self) -> usize {
        self.expected_items
    }

    /// Inserts that may have added a new item
    ///
    /// Counts every `insert` and every `query_and_insert` that returned false.
    pub fn insertions(&self) -> u64 {
        self.insertions
    }

    /// Number of bits set
    pub fn bits_set(&self) -> u64 {
        self.bitmap.count_ones()
    }

    /// Fraction of bits set, 1.0 for a zero-sized filter
    pub fn fill_ratio(&self) -> f64 {
        match self.bit_count() {
            0 => 1.0,
            m => self.bits_set() as f64 / m as f64,
        }
    }

    /// False positive rate estimated from the current fill: fill_ratio^k
    pub fn estimated_fpr(&self) -> f64 {
        fpr_from_fill(self.fill_ratio(), self.k)
    }

    /// Theoretical false positive rate at the current load
    ///
    /// Formula: FPR = (1 - e^(-kn/m))^k with n = [`Self::insertions`]
    pub fn false_positive_rate(&self) -> f64 {
        calculate_fpr(self.bit_count(), self.insertions, self.k)
    }
}

impl<H: KeyedHasher> MembershipApi for BloomFilter<H> {
    fn insert(&mut self, item: &[u8]) {
        BloomFilter::insert(self, item)
    }

    fn query(&self, item: &[u8]) -> bool {
        BloomFilter::query(self, item)
    }

    fn query_and_insert(&mut self, item: &[u8]) -> bool {
        BloomFilter::query_and_insert(self, item)
    }
}

impl<H: KeyedHasher> Drop for BloomFilter<H> {
    fn drop(&mut self) {
        self.metrics.record_filter_freed(self.bitmap.byte_len());
    }
}

impl<H: KeyedHasher> fmt::Debug for BloomFilter<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BloomFilter")
            .field("bit_count", &self.bitmap.bit_count())
            .field("hash_rounds", &self.k)
            .field("expected_items", &self.expected_items)
            .field("insertions", &self.insertions)
            .finish_non_exhaustive()
    }
}
