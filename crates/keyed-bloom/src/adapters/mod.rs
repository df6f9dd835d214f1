//! Adapters Layer (Driven Adapters)
//!
//! Implementations of the outbound ports.
//!
//! | Port | Adapter |
//! |------|---------|
//! | `KeyedHasher` | `SipHasher24Adapter` |

pub mod siphash;

pub use siphash::SipHasher24Adapter;
