//! Outbound Ports (Driven Ports)
//!
//! Capabilities the filter consumes but does not implement.

use crate::domain::SecretKey;

/// Keyed 64-bit hash function
///
/// Contract:
/// - deterministic for a given (key, input)
/// - outputs under different keys are effectively independent
/// - not predictable or invertible without the key, so an adversary who
///   controls inputs cannot steer them onto a few bits
///
/// SipHash-family functions satisfy this. A general cryptographic hash
/// truncated to 64 bits also does, at higher cost.
pub trait KeyedHasher: Send + Sync {
    /// Bind the hash function to a secret key.
    fn with_key(key: &SecretKey) -> Self
    where
        Self: Sized;

    /// Hash `data` under the bound key.
    fn hash(&self, data: &[u8]) -> u64;
}
