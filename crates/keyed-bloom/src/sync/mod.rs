//! Thread-safe access to a Bloom filter.
//!
//! A [`crate::BloomFilter`] performs read-modify-write on shared bytes and
//! has no internal synchronization; two unsynchronized writers could lose a
//! bit and break the no-false-negative guarantee. The borrow checker already
//! forbids that for plain `&mut` use. [`SharedBloomFilter`] is the in-process
//! answer when several threads need one filter.

pub mod shared;

pub use shared::SharedBloomFilter;
