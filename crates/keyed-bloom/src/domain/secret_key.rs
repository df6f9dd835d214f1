//! Secret hash keys
//!
//! Each filter samples two independent 128-bit keys at construction. Keys
//! are never serialized, never logged, and wiped on drop.

use rand::{CryptoRng, RngCore};
use std::fmt;
use zeroize::Zeroize;

/// Key length in bytes (SipHash-2-4 takes a 128-bit key)
pub const KEY_BYTES: usize = 16;

/// 128-bit secret key for a keyed hash.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct SecretKey([u8; KEY_BYTES]);

impl SecretKey {
    /// Create from bytes.
    pub fn from_bytes(bytes: [u8; KEY_BYTES]) -> Self {
        Self(bytes)
    }

    /// Draw a fresh key from a cryptographically secure RNG.
    ///
    /// Consumes exactly one `fill_bytes` call on `rng`.
    pub fn generate<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0u8; KEY_BYTES];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Raw key bytes, for [`crate::KeyedHasher`] implementations only.
    pub fn expose_secret(&self) -> &[u8; KEY_BYTES] {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}
