//! # Membership Contract
//!
//! The concrete `item-i` scenario and the return contract of
//! `query_and_insert`.
//!
//! `query_and_insert` answers "did the item look present BEFORE this call?"
//! and always inserts. It does NOT answer "did this call add anything"; that
//! reading would invert the boolean in the common case. The tests below pin
//! the first form.

#[cfg(test)]
mod tests {
    use keyed_bloom::{compute_bitmap_size, BloomFilter, MembershipApi, SharedBloomFilter};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sized_filter(n: usize, seed: u64) -> BloomFilter {
        let size = compute_bitmap_size(n, 0.01);
        BloomFilter::with_rng(size, n, &mut StdRng::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn test_item_scenario_no_false_negatives() {
        let mut filter = sized_filter(1000, 0xC0DE);

        for i in 0..1000 {
            filter.insert(format!("item-{}", i).as_bytes());
        }
        for i in 0..1000 {
            assert!(
                filter.query(format!("item-{}", i).as_bytes()),
                "False negative for item-{}",
                i
            );
        }
    }

    #[test]
    fn test_item_scenario_absent_rate_near_one_percent() {
        let mut filter = sized_filter(1000, 0xC0DF);
        for i in 0..1000 {
            filter.insert(format!("item-{}", i).as_bytes());
        }

        let probes = 50_000;
        let hits = (0..probes)
            .filter(|i| filter.query(format!("absent-{}", i).as_bytes()))
            .count();
        let rate = hits as f64 / probes as f64;

        assert!(rate < 0.025, "Aggregate FPR {} should stay near 1%", rate);
    }

    #[test]
    fn test_query_and_insert_first_call_false_then_true() {
        let mut filter = sized_filter(1000, 0xC0E0);

        for i in 0..200 {
            let item = format!("nonce-{}", i);
            assert!(
                !filter.query_and_insert(item.as_bytes()),
                "First sighting of {} must return false",
                item
            );
            assert!(filter.query(item.as_bytes()));
            assert!(
                filter.query_and_insert(item.as_bytes()),
                "Second sighting of {} must return true",
                item
            );
        }
    }

    #[test]
    fn test_query_and_insert_equivalent_to_query_then_insert() {
        let mut a = sized_filter(500, 0xC0E1);
        let mut b = sized_filter(500, 0xC0E1);

        for i in 0..2000 {
            let item = format!("mixed-{}", i % 700);
            let combined = a.query_and_insert(item.as_bytes());
            let separate = b.query(item.as_bytes());
            b.insert(item.as_bytes());
            assert_eq!(combined, separate, "Divergence at {}", item);
        }
        assert_eq!(a.bits_set(), b.bits_set());
    }

    #[test]
    fn test_monotonic_under_further_inserts() {
        let mut filter = sized_filter(1000, 0xC0E2);
        filter.insert(b"anchor");

        for i in 0..5000 {
            filter.insert(format!("noise-{}", i).as_bytes());
            if i % 250 == 0 {
                assert!(filter.query(b"anchor"));
            }
        }
        assert!(filter.query(b"anchor"));
    }

    #[test]
    fn test_arbitrary_byte_items() {
        let mut filter = sized_filter(100, 0xC0E3);
        let items: [&[u8]; 5] = [b"", b"\0", b"\xff\xfe\xfd", &[0u8; 1024], "ünïcødé".as_bytes()];

        for item in items {
            filter.insert(item);
        }
        for item in items {
            assert!(filter.query(item));
        }
    }

    #[test]
    fn test_shared_and_plain_agree_through_port() {
        fn run<M: MembershipApi>(m: &mut M) -> Vec<bool> {
            (0..300)
                .map(|i| m.query_and_insert(format!("dup-{}", i % 100).as_bytes()))
                .collect()
        }

        let mut plain = sized_filter(200, 0xC0E4);
        let mut shared = SharedBloomFilter::new(sized_filter(200, 0xC0E4));

        assert_eq!(run(&mut plain), run(&mut shared));
    }
}
