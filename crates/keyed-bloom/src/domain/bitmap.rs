//! Fixed-length bitmap store
//!
//! Bits are addressed as `byte = position / 8`, `bit = position % 8`, least
//! significant bit first. Bits only ever go from 0 to 1.

use bitvec::prelude::*;

use crate::error::{FilterError, FilterResult};

use super::parameters::bit_count_for;

/// Zero-initialised bit array of fixed length
#[derive(Clone, Debug)]
pub struct Bitmap {
    bits: BitVec<u8, Lsb0>,
}

impl Bitmap {
    /// Allocate a zeroed bitmap of `bytes` bytes.
    ///
    /// Rejects sizes whose bit count overflows before touching the allocator,
    /// and reports allocation failure as an error instead of aborting.
    pub fn with_bytes(bytes: usize) -> FilterResult<Self> {
        let bit_count = bit_count_for(bytes).ok_or(FilterError::SizeOverflow { bytes })?;
        if bit_count > BitSlice::<u8, Lsb0>::MAX_BITS as u64 {
            return Err(FilterError::SizeOverflow { bytes });
        }

        let mut raw: Vec<u8> = Vec::new();
        raw.try_reserve_exact(bytes)
            .map_err(|_| FilterError::AllocationFailed { bytes })?;
        raw.resize(bytes, 0);

        Ok(Self {
            bits: BitVec::from_vec(raw),
        })
    }

    /// Total addressable bits.
    #[inline]
    pub fn bit_count(&self) -> u64 {
        self.bits.len() as u64
    }

    /// Size of the backing buffer in bytes.
    pub fn byte_len(&self) -> usize {
        self.bits.as_raw_slice().len()
    }

    /// Set the bit at `position`. Idempotent.
    #[inline]
    pub fn set_bit(&mut self, position: u64) {
        self.bits.set(position as usize, true);
    }

    /// Current value of the bit at `position`.
    #[inline]
    pub fn test_bit(&self, position: u64) -> bool {
        self.bits[position as usize]
    }

    /// Return the bit's value before this call, then set it.
    #[inline]
    pub fn test_and_set_bit(&mut self, position: u64) -> bool {
        self.bits.replace(position as usize, true)
    }

    /// Number of bits currently set.
    pub fn count_ones(&self) -> u64 {
        self.bits.count_ones() as u64
    }

    #[cfg(test)]
    pub(crate) fn bits_snapshot(&self) -> Vec<u8> {
        self.bits.as_raw_slice().to_vec()
    }
}
