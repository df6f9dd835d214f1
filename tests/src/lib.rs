//! # Keyed-Bloom Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion benchmarks for the membership operations
//! ├── exploits/         # Adversarial input scenarios
//! └── integration/      # End-to-end and statistical accuracy checks
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p keyed-bloom-tests
//!
//! # By category
//! cargo test -p keyed-bloom-tests integration::
//! cargo test -p keyed-bloom-tests exploits::
//!
//! # Benchmarks
//! cargo bench -p keyed-bloom-tests
//! ```

pub mod integration;

/// Install a test-friendly tracing subscriber once; honours `RUST_LOG`.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
