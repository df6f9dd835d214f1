//! Hash expansion for Bloom filter probes
//!
//! Derives `k` probe values from exactly two keyed hashes using enhanced
//! double hashing:
//!
//! - `h[0] = H(key_a, item)`
//! - `h[1] = H(key_b, item)`
//! - `h[i] = (h[0] + i * h[1]) mod P` for `i >= 2`, `P = 2^64 - 59`
//!
//! Each value maps to a bit with `h[i] mod bit_count`. The hash provider is
//! called twice regardless of `k`.

use crate::ports::KeyedHasher;

/// Largest prime below 2^64.
pub const EXPANSION_MODULUS: u64 = 0xffff_ffff_ffff_ffc5;

/// The two base hashes of an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BaseHashes {
    pub h0: u64,
    pub h1: u64,
}

impl BaseHashes {
    /// Compute both base hashes for `item`.
    pub fn compute<H: KeyedHasher>(hasher_a: &H, hasher_b: &H, item: &[u8]) -> Self {
        Self {
            h0: hasher_a.hash(item),
            h1: hasher_b.hash(item),
        }
    }

    /// Probe value for round `i`.
    pub fn round(&self, i: usize) -> u64 {
        match i {
            0 => self.h0,
            1 => self.h1,
            _ => {
                // 128-bit intermediate keeps h0 + i*h1 exact before reduction
                let sum = self.h0 as u128 + (i as u128) * (self.h1 as u128);
                (sum % EXPANSION_MODULUS as u128) as u64
            }
        }
    }

    /// Bit positions for rounds `0..k` in a bitmap of `bit_count` bits.
    ///
    /// `bit_count` must be non-zero.
    pub fn positions(self, k: usize, bit_count: u64) -> ProbePositions {
        debug_assert!(bit_count > 0, "positions() requires a non-empty bitmap");
        ProbePositions {
            base: self,
            next: 0,
            k,
            bit_count,
        }
    }
}

/// Iterator over the `k` bit positions probed for one item.
#[derive(Clone, Debug)]
pub struct ProbePositions {
    base: BaseHashes,
    next: usize,
    k: usize,
    bit_count: u64,
}

impl Iterator for ProbePositions {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        if self.next >= self.k {
            return None;
        }
        let position = self.base.round(self.next) % self.bit_count;
        self.next += 1;
        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.k - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProbePositions {}
