//! Membership guarantees of the Bloom filter
//!
//! These tests drive the public API only: build a filter, insert, query.

use bloomset::BloomFilter;
use proptest::prelude::*;

const LANGUAGES: [&str; 5] = ["Java", "Python", "JavaScript", "Go", "PHP"];

#[test]
fn inserted_items_are_present() {
    let mut bloom = BloomFilter::new(5, 1e-6).unwrap();
    for item in LANGUAGES {
        bloom.insert(item);
    }

    for item in LANGUAGES {
        assert!(bloom.query(item), "{} should be present", item);
    }
}

#[test]
fn non_inserted_languages_are_absent() {
    let mut bloom = BloomFilter::new(5, 1e-6).unwrap();
    for item in LANGUAGES {
        bloom.insert(item);
    }

    assert!(!bloom.query("Rust"));
    assert!(!bloom.query("Scala"));
}

#[test]
fn put_and_contains_with_spare_capacity() {
    let mut bloom = BloomFilter::new(1000, 1e-6).unwrap();
    let inserted = ["java", "python", "php", "go", ""];
    let not_inserted = ["javascript", "rust", "scala"];

    for item in inserted {
        bloom.insert(item);
    }
    for item in inserted {
        assert!(bloom.query(item), "{:?} should be present", item);
    }
    for item in not_inserted {
        assert!(!bloom.query(item), "{:?} should be absent", item);
    }
}

#[test]
fn empty_filter_reports_nothing() {
    let bloom = BloomFilter::new(100, 0.01).unwrap();

    assert!(!bloom.query(""));
    assert!(!bloom.query("anything"));
    assert!((0..1000).all(|i| !bloom.query(&i.to_string())));
    assert_eq!(bloom.count_set_bits(), 0);
}

#[test]
fn empty_string_is_a_key() {
    let mut bloom = BloomFilter::new(10, 0.01).unwrap();
    assert!(!bloom.query(""));

    bloom.insert("");
    assert!(bloom.query(""));
}

#[test]
fn false_positive_rate_stays_near_target() {
    let n = 100;
    let expected_fpr = 0.5;
    let samples = 100_000;

    let mut bloom = BloomFilter::new(n, expected_fpr).unwrap();
    for i in 0..n {
        bloom.insert(&format!("inserted-{}", i));
    }

    let false_positives = (0..samples)
        .filter(|i| bloom.query(&format!("noninserted-{}", i)))
        .count();
    let actual_fpr = false_positives as f64 / samples as f64;

    assert!(
        (actual_fpr - expected_fpr).abs() < 0.1,
        "false positive rate {} too far from {}",
        actual_fpr,
        expected_fpr
    );
}

#[test]
fn no_false_negatives_at_capacity() {
    let mut bloom = BloomFilter::new(10_000, 0.01).unwrap();
    let items: Vec<String> = (0..10_000).map(|i| format!("item-{}", i)).collect();

    for item in &items {
        bloom.insert(item);
    }

    assert!(items.iter().all(|item| bloom.query(item)));
}

#[test]
fn saturation_grows_monotonically() {
    let mut bloom = BloomFilter::new(1000, 0.01).unwrap();
    let mut previous = bloom.count_set_bits();

    for i in 0..2000 {
        bloom.insert(&format!("key-{}", i));
        let current = bloom.count_set_bits();
        assert!(current >= previous);
        previous = current;
    }

    assert!(bloom.load_factor() > 0.5);
    assert!(bloom.load_factor() <= 1.0);
}

proptest! {
    #[test]
    fn prop_no_false_negatives(items in prop::collection::vec(".*", 0..200)) {
        let mut bloom = BloomFilter::new(100, 0.01).unwrap();
        for item in &items {
            bloom.insert(item);
        }
        for item in &items {
            prop_assert!(bloom.query(item));
        }
    }

    #[test]
    fn prop_insert_is_idempotent(
        items in prop::collection::vec(".*", 1..50),
        probes in prop::collection::vec(".*", 0..50),
    ) {
        let mut bloom = BloomFilter::new(50, 0.05).unwrap();
        for item in &items {
            bloom.insert(item);
        }
        let before: Vec<bool> = probes.iter().map(|p| bloom.query(p)).collect();
        let bytes_before = bloom.as_bytes().to_vec();

        bloom.insert(&items[0]);

        let after: Vec<bool> = probes.iter().map(|p| bloom.query(p)).collect();
        prop_assert_eq!(before, after);
        prop_assert_eq!(bytes_before, bloom.as_bytes().to_vec());
    }

    #[test]
    fn prop_identical_filters_agree(
        items in prop::collection::vec(".*", 0..100),
        probes in prop::collection::vec(".*", 0..100),
    ) {
        let mut a = BloomFilter::new(64, 0.02).unwrap();
        let mut b = BloomFilter::new(64, 0.02).unwrap();
        for item in &items {
            a.insert(item);
            b.insert(item);
        }
        for probe in probes.iter().chain(items.iter()) {
            prop_assert_eq!(a.query(probe), b.query(probe));
            prop_assert_eq!(a.indices(probe), b.indices(probe));
        }
    }

    #[test]
    fn prop_indices_in_range(
        item in ".*",
        expected_items in 1usize..10_000,
        fpr in 0.0001f64..0.99,
    ) {
        let bloom = BloomFilter::new(expected_items, fpr).unwrap();
        let indices = bloom.indices(&item);

        prop_assert_eq!(indices.len(), bloom.num_hash_functions());
        prop_assert!(indices.iter().all(|&i| i < bloom.num_bits()));
        prop_assert_eq!(bloom.as_bytes().len(), (bloom.num_bits() + 7) / 8);
    }
}
