//! Inbound Ports (Driving Ports)
//!
//! The membership API that callers drive. Implemented by both the plain
//! filter and the lock-guarded shared wrapper, so code can be written once
//! against either.

/// Probabilistic set membership (driving port)
///
/// No false negatives: after `insert(x)`, `query(x)` is true for the life of
/// the filter. A true answer may be a false positive.
pub trait MembershipApi {
    /// Record `item` as seen.
    fn insert(&mut self, item: &[u8]);

    /// `false` means `item` was definitely never inserted.
    fn query(&self, item: &[u8]) -> bool;

    /// Insert `item` and report whether it appeared present *before* the call.
    ///
    /// The insert side effect happens regardless of the returned value.
    fn query_and_insert(&mut self, item: &[u8]) -> bool;
}
