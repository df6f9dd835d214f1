//! Lock-guarded Bloom filter
//!
//! Queries take a shared read lock, so they run concurrently. `insert` and
//! `query_and_insert` take the write lock; `query_and_insert` stays atomic
//! with respect to every other caller.

use parking_lot::RwLock;

use crate::adapters::SipHasher24Adapter;
use crate::domain::BloomFilter;
use crate::ports::{KeyedHasher, MembershipApi};

/// A [`BloomFilter`] behind a `parking_lot::RwLock`
///
/// All methods take `&self`; share it with `Arc`.
///
/// ```
/// use keyed_bloom::{BloomFilter, SharedBloomFilter};
/// use std::sync::Arc;
/// use std::thread;
///
/// let shared = Arc::new(SharedBloomFilter::new(BloomFilter::new(4096, 1000).unwrap()));
/// let handles: Vec<_> = (0..4)
///     .map(|t| {
///         let shared = Arc::clone(&shared);
///         thread::spawn(move || {
///             for i in 0..100 {
///                 shared.insert(format!("{}-{}", t, i).as_bytes());
///             }
///         })
///     })
///     .collect();
/// for h in handles {
///     h.join().unwrap();
/// }
/// assert!(shared.query(b"3-99"));
/// ```
#[derive(Debug)]
pub struct SharedBloomFilter<H: KeyedHasher = SipHasher24Adapter> {
    inner: RwLock<BloomFilter<H>>,
}

impl<H: KeyedHasher> SharedBloomFilter<H> {
    /// Wrap a filter for shared use
    pub fn new(filter: BloomFilter<H>) -> Self {
        Self {
            inner: RwLock::new(filter),
        }
    }

    /// Insert an item (exclusive lock)
    pub fn insert(&self, item: &[u8]) {
        self.inner.write().insert(item);
    }

    /// Test membership (shared lock)
    pub fn query(&self, item: &[u8]) -> bool {
        self.inner.read().query(item)
    }

    /// Insert and report prior membership as one atomic step (exclusive lock)
    pub fn query_and_insert(&self, item: &[u8]) -> bool {
        self.inner.write().query_and_insert(item)
    }

    /// Run `f` against the filter under a read lock
    pub fn with_filter<T>(&self, f: impl FnOnce(&BloomFilter<H>) -> T) -> T {
        f(&self.inner.read())
    }

    /// Unwrap the filter
    pub fn into_inner(self) -> BloomFilter<H> {
        self.inner.into_inner()
    }
}

impl<H: KeyedHasher> MembershipApi for SharedBloomFilter<H> {
    fn insert(&mut self, item: &[u8]) {
        self.inner.get_mut().insert(item)
    }

    fn query(&self, item: &[u8]) -> bool {
        SharedBloomFilter::query(self, item)
    }

    fn query_and_insert(&mut self, item: &[u8]) -> bool {
        self.inner.get_mut().query_and_insert(item)
    }
}
