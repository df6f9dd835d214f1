//! # Sizing and False Positive Accuracy
//!
//! Filters sized with `compute_bitmap_size` and loaded to their expected
//! count must measure close to the target false positive rate.

#[cfg(test)]
mod tests {
    use keyed_bloom::{compute_bitmap_size, BloomFilter};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Insert `n` items, probe `probes` absent ones, return measured FPR.
    fn measure_fpr(n: usize, target: f64, probes: usize, seed: u64) -> f64 {
        let bytes = compute_bitmap_size(n, target);
        let mut filter = BloomFilter::with_rng(bytes, n, &mut StdRng::seed_from_u64(seed))
            .expect("sized filter should construct");

        for i in 0..n {
            filter.insert(format!("inserted-{}", i).as_bytes());
        }

        let false_positives = (0..probes)
            .filter(|i| filter.query(format!("never-inserted-{}", i).as_bytes()))
            .count();

        false_positives as f64 / probes as f64
    }

    #[test]
    fn test_fpr_n10000_p001_within_tolerance() {
        crate::init_test_tracing();

        let target = 0.01;
        let measured = measure_fpr(10_000, target, 100_000, 0xB100);

        // Expected ≈1%; allow 2.5x before calling it broken
        assert!(
            measured <= target * 2.5,
            "Measured FPR {} exceeds 2.5 * target {}",
            measured,
            target
        );
        assert!(
            measured >= target / 4.0,
            "Measured FPR {} is implausibly low for a filter at capacity",
            measured
        );
    }

    #[test]
    fn test_fpr_tighter_target() {
        let target = 0.001;
        let measured = measure_fpr(5_000, target, 100_000, 0xB101);
        assert!(
            measured <= target * 3.0,
            "Measured FPR {} exceeds 3 * target {}",
            measured,
            target
        );
    }

    #[test]
    fn test_estimates_track_measurement() {
        let n = 10_000;
        let bytes = compute_bitmap_size(n, 0.01);
        let mut filter = BloomFilter::with_rng(bytes, n, &mut StdRng::seed_from_u64(0xB102)).unwrap();

        for i in 0..n {
            filter.insert(format!("inserted-{}", i).as_bytes());
        }

        let theoretical = filter.false_positive_rate();
        let estimated = filter.estimated_fpr();
        assert!((0.008..0.012).contains(&theoretical), "theoretical {}", theoretical);
        assert!((0.007..0.014).contains(&estimated), "estimated {}", estimated);
    }

    #[test]
    fn test_overloaded_filter_degrades_gracefully() {
        // 10x the sized load: FPR rises, no false negatives appear
        let n = 1_000;
        let bytes = compute_bitmap_size(n, 0.01);
        let mut filter = BloomFilter::with_rng(bytes, n, &mut StdRng::seed_from_u64(0xB103)).unwrap();

        for i in 0..n * 10 {
            filter.insert(format!("over-{}", i).as_bytes());
        }
        for i in 0..n * 10 {
            assert!(filter.query(format!("over-{}", i).as_bytes()));
        }
        assert!(filter.estimated_fpr() > 0.5);
    }
}
