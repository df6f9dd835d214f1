//! SipHash-2-4 keyed hasher adapter

use siphasher::sip::SipHasher24;
use std::hash::Hasher;

use crate::domain::SecretKey;
use crate::ports::KeyedHasher;

/// SipHash-based keyed hasher (DoS-resistant).
///
/// Uses SipHash-2-4 which is designed to be:
/// - Fast for short inputs
/// - Resistant to hash-flooding attacks
///
/// The key is held as a [`SecretKey`] and wiped when the adapter drops. A
/// fresh SipHash state is derived from it per call.
#[derive(Debug, Clone)]
pub struct SipHasher24Adapter {
    key: SecretKey,
}

impl KeyedHasher for SipHasher24Adapter {
    fn with_key(key: &SecretKey) -> Self {
        Self { key: key.clone() }
    }

    fn hash(&self, data: &[u8]) -> u64 {
        let mut hasher = SipHasher24::new_with_key(self.key.expose_secret());
        hasher.write(data);
        hasher.finish()
    }
}
