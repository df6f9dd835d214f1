//! # Keyed-Bloom Benchmarks
//!
//! | Operation | Claim |
//! |-----------|-------|
//! | insert / query / query_and_insert | 2 keyed hashes + O(k) bit ops |
//! | compute_bitmap_size / optimal_k | O(1) |

use criterion::{criterion_group, criterion_main, Criterion};

fn bloom_benchmarks(c: &mut Criterion) {
    keyed_bloom_tests::benchmarks::bloom_filter::register_benchmarks(c);
}

criterion_group!(benches, bloom_benchmarks);
criterion_main!(benches);
