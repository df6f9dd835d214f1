//! Optimal Bloom filter parameter calculation
//!
//! Formulas:
//! - bytes = round(n * ln(p) / (-8 * ln(2)^2))  -- minimal bitmap size
//! - k = max(1, ceil((m / n) * ln(2)))          -- hash rounds for m bits
//! - FPR = (1 - e^(-kn/m))^k                    -- theoretical rate

use std::f64::consts::LN_2;

/// Bits per bitmap byte
pub const BITS_PER_BYTE: u64 = 8;

/// Recommended bitmap size in bytes for `expected_items` at `target_fpr`
///
/// `target_fpr` is expected in the open interval (0, 1). Values outside it
/// produce a zero or saturated size rather than panicking; validated callers
/// should go through [`crate::domain::BloomConfigBuilder`].
///
/// `expected_items == 0` yields 0.
pub fn compute_bitmap_size(expected_items: usize, target_fpr: f64) -> usize {
    let ln2_squared = LN_2 * LN_2;
    let bytes = (expected_items as f64) * target_fpr.ln() / (-(BITS_PER_BYTE as f64) * ln2_squared);

    // `as` saturates on overflow and maps NaN to 0
    bytes.round() as usize
}

/// Optimal number of hash rounds for a bitmap of `bit_count` bits
///
/// Always at least 1. An `expected_items` of 0 gives 1 round.
pub fn optimal_k(bit_count: u64, expected_items: usize) -> usize {
    if expected_items == 0 {
        return 1;
    }

    let k = ((bit_count as f64 / expected_items as f64) * LN_2).ceil() as usize;
    k.max(1)
}

/// Theoretical false positive rate for given parameters
///
/// Formula: FPR = (1 - e^(-kn/m))^k
pub fn calculate_fpr(bit_count: u64, items: u64, k: usize) -> f64 {
    if bit_count == 0 {
        return 1.0;
    }
    let exponent = -(k as f64) * (items as f64) / (bit_count as f64);
    (1.0 - exponent.exp()).powf(k as f64)
}

/// False positive rate implied by the fraction of bits set: fill^k
pub fn fpr_from_fill(fill_ratio: f64, k: usize) -> f64 {
    fill_ratio.powf(k as f64)
}

/// Bit count for a bitmap of `bytes` bytes, or `None` if it overflows u64
pub fn bit_count_for(bytes: usize) -> Option<u64> {
    u64::try_from(bytes).ok()?.checked_mul(BITS_PER_BYTE)
}
