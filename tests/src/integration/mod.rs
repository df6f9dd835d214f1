//! # Integration Tests
//!
//! End-to-end use of the public API: sizing, construction, membership and
//! teardown together.

pub mod accuracy;
pub mod membership_contract;
