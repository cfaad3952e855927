//! Tests for ranged draws, choice, sampling, shuffling and weighted choice

use mwc_srand_core_rs::{Srand, SrandError};
use proptest::prelude::*;
use std::collections::HashSet;

fn range(k: usize) -> Vec<usize> {
    (0..k).collect()
}

// ============================================================================
// in_range / int_in_range
// ============================================================================

#[test]
fn test_in_range_returns_only_numbers_in_range() {
    let mut rng = Srand::new(12345).unwrap();
    let (min, max) = (10.0, 20.0);

    for _ in 0..10_000 {
        let n = rng.in_range(min, max);
        assert!(n >= min, "number {} < lower bound", n);
        assert!(n < max, "number {} >= upper bound", n);
    }
}

#[test]
fn test_in_range_zero_width_always_returns_bound() {
    let mut rng = Srand::new(12345).unwrap();
    for _ in 0..100 {
        assert_eq!(rng.in_range(1.0, 1.0), 1.0);
        assert_eq!(rng.in_range(-3.25, -3.25), -3.25);
    }
}

#[test]
fn test_int_in_range_returns_only_integers_in_range() {
    let mut rng = Srand::new(12345).unwrap();
    let mut seen = HashSet::new();

    for _ in 0..1000 {
        let n = rng.int_in_range(10, 20);
        assert!((10..=20).contains(&n), "integer {} out of [10, 20]", n);
        seen.insert(n);
    }

    assert_eq!(seen.len(), 11, "both bounds should be reachable");
}

#[test]
fn test_int_in_range_negative_bounds() {
    let mut rng = Srand::new(8).unwrap();
    for _ in 0..1000 {
        let n = rng.int_in_range(-5, -1);
        assert!((-5..=-1).contains(&n));
    }
}

// ============================================================================
// choice / choices
// ============================================================================

#[test]
fn test_choice_errors_on_empty() {
    let mut rng = Srand::new(1).unwrap();
    let empty: Vec<u8> = Vec::new();
    assert_eq!(rng.choice(&empty), Err(SrandError::EmptySequence));
}

#[test]
fn test_choice_single_element_always_returned() {
    let mut rng = Srand::new(1).unwrap();
    for _ in 0..100 {
        assert_eq!(*rng.choice(&["foo"]).unwrap(), "foo");
    }
}

#[test]
fn test_choice_returns_members_and_varies() {
    let mut rng = Srand::new(4444).unwrap();
    let arr = range(25);
    let mut seen = HashSet::new();

    for _ in 0..1000 {
        let n = *rng.choice(&arr).unwrap();
        assert!(arr.contains(&n));
        seen.insert(n);
    }

    assert!(seen.len() > 1, "choice always returned the same element");
}

#[test]
fn test_choices_of_empty_array() {
    let mut rng = Srand::new(1).unwrap();
    let empty: Vec<u8> = Vec::new();

    assert_eq!(rng.choices(&empty, 0).unwrap(), Vec::<u8>::new());
    assert_eq!(rng.choices(&empty, 1), Err(SrandError::EmptySequence));
}

#[test]
fn test_choices_of_single_element_array() {
    let mut rng = Srand::new(1).unwrap();

    assert_eq!(rng.choices(&[1], 0).unwrap(), Vec::<i32>::new());
    assert_eq!(rng.choices(&[1], 1).unwrap(), vec![1]);
    assert_eq!(rng.choices(&[1], 5).unwrap(), vec![1, 1, 1, 1, 1]);
}

#[test]
fn test_choices_of_larger_array() {
    let mut rng = Srand::new(2718).unwrap();
    let arr = range(100);

    assert_eq!(rng.choices(&arr, 10).unwrap().len(), 10);

    let picked = rng.choices(&arr, 100).unwrap();
    assert!(picked.iter().all(|n| arr.contains(n)));
    let distinct: HashSet<_> = picked.into_iter().collect();
    assert!(distinct.len() < 100, "sampling with replacement should repeat");
}

// ============================================================================
// sample
// ============================================================================

#[test]
fn test_sample_of_empty_array() {
    let mut rng = Srand::new(1).unwrap();
    let empty: Vec<u8> = Vec::new();

    assert_eq!(rng.sample(&empty, 0).unwrap(), Vec::<u8>::new());
    assert_eq!(
        rng.sample(&empty, 1),
        Err(SrandError::SampleSize {
            requested: 1,
            population: 0
        })
    );
}

#[test]
fn test_sample_of_single_element_array() {
    let mut rng = Srand::new(1).unwrap();

    assert_eq!(rng.sample(&[1], 0).unwrap(), Vec::<i32>::new());
    assert_eq!(rng.sample(&[1], 1).unwrap(), vec![1]);
    assert!(rng.sample(&[1], 5).is_err());
}

#[test]
fn test_sample_of_larger_array() {
    let mut rng = Srand::new(1618).unwrap();
    let arr = range(100);
    assert_eq!(rng.sample(&arr, 10).unwrap().len(), 10);

    let population: HashSet<_> = arr.iter().copied().collect();
    let sample = rng.sample(&arr, 90).unwrap();
    let distinct: HashSet<_> = sample.iter().copied().collect();

    assert_eq!(distinct.len(), 90);
    assert!(sample.iter().all(|n| population.contains(n)));
}

#[test]
fn test_sample_full_population_is_permutation() {
    let mut rng = Srand::new(99).unwrap();
    let arr = range(30);

    let mut sample = rng.sample(&arr, arr.len()).unwrap();
    assert_ne!(sample, arr, "full sample should be shuffled");

    sample.sort();
    assert_eq!(sample, arr);
}

#[test]
fn test_sample_full_population_matches_shuffle_of_copy() {
    let mut a = Srand::new(123).unwrap();
    let mut b = Srand::new(123).unwrap();
    let arr = range(12);

    let sample = a.sample(&arr, arr.len()).unwrap();
    let mut copy = arr.clone();
    b.shuffle(&mut copy);

    assert_eq!(sample, copy);
}

// ============================================================================
// shuffle
// ============================================================================

#[test]
fn test_shuffle_of_empty_array_returns_empty_array() {
    let mut rng = Srand::new(1).unwrap();
    let mut empty: Vec<u8> = Vec::new();
    assert!(rng.shuffle(&mut empty).is_empty());
}

#[test]
fn test_shuffle_with_single_element_array() {
    let mut rng = Srand::new(1).unwrap();
    let before = rng.get_state();
    let mut single = [42];

    assert_eq!(rng.shuffle(&mut single), &[42]);
    assert_eq!(rng.get_state(), before, "single element shuffle draws nothing");
}

#[test]
fn test_shuffle_works_in_place() {
    let mut rng = Srand::new(1).unwrap();
    let mut arr = range(100);
    let ptr = arr.as_ptr();

    let returned = rng.shuffle(&mut arr);
    assert_eq!(returned.as_ptr(), ptr, "shuffle must return the same slice");
}

#[test]
fn test_shuffle_of_larger_array() {
    let mut rng = Srand::new(5150).unwrap();
    let arr = range(1000);
    let mut shuffled = arr.clone();
    rng.shuffle(&mut shuffled);

    assert_eq!(arr.len(), shuffled.len());
    assert_ne!(arr, shuffled);

    shuffled.sort();
    assert_eq!(arr, shuffled);
}

#[test]
fn test_shuffle_never_identity_over_many_trials() {
    let mut rng = Srand::new(64).unwrap();
    let arr = range(10);

    for _ in 0..500 {
        let mut shuffled = arr.clone();
        rng.shuffle(&mut shuffled);
        assert_ne!(shuffled, arr);
    }
}

// ============================================================================
// weighted_choice
// ============================================================================

#[test]
fn test_weighted_choice_errors() {
    let mut rng = Srand::new(1).unwrap();
    let empty: [i32; 0] = [];

    assert!(rng.weighted_choice(&empty, &[]).is_err());
    assert!(rng.weighted_choice(&[1, 2, 3], &[0.5, 0.5]).is_err());
    assert!(rng.weighted_choice(&[1, 2], &[0.5, 0.3, 0.2]).is_err());
    assert!(rng.weighted_choice(&[1, 2, 3], &[0.5, -0.3, 0.2]).is_err());
    assert!(rng.weighted_choice(&[1, 2, 3], &[0.0, 0.0, 0.0]).is_err());
}

#[test]
fn test_weighted_choice_with_single_element() {
    let mut rng = Srand::new(1).unwrap();
    assert_eq!(*rng.weighted_choice(&["foo"], &[1.0]).unwrap(), "foo");
    assert_eq!(*rng.weighted_choice(&["bar"], &[0.5]).unwrap(), "bar");
}

#[test]
fn test_weighted_choice_with_uniform_weights_varies() {
    let mut rng = Srand::new(12345).unwrap();
    let arr = range(10);
    let weights = vec![1.0; 10];
    let mut seen = HashSet::new();

    for _ in 0..1000 {
        seen.insert(*rng.weighted_choice(&arr, &weights).unwrap());
    }

    assert!(seen.len() > 5, "Should have variety with uniform weights");
}

#[test]
fn test_weighted_choice_respects_weight_distribution() {
    let mut rng = Srand::new(12345).unwrap();
    let items = ["rare", "common"];
    let weights = [1.0, 99.0];

    let trials = 10_000;
    let common = (0..trials)
        .filter(|_| *rng.weighted_choice(&items, &weights).unwrap() == "common")
        .count();

    let common_fraction = common as f64 / trials as f64;
    assert!(
        common_fraction > 0.97 && common_fraction < 1.0,
        "Common should be ~99%, got {}%",
        common_fraction * 100.0
    );
}

#[test]
fn test_weighted_choice_handles_zero_weights() {
    let mut rng = Srand::new(12345).unwrap();
    for _ in 0..100 {
        assert_eq!(
            *rng.weighted_choice(&["never", "always"], &[0.0, 1.0]).unwrap(),
            "always"
        );
    }
}

proptest! {
    #[test]
    fn prop_int_in_range_contained(seed in 1u32.., min in -1_000_000i64..1_000_000, width in 0i64..10_000) {
        let mut rng = Srand::new(seed).unwrap();
        let max = min + width;
        for _ in 0..20 {
            let n = rng.int_in_range(min, max);
            prop_assert!(n >= min && n <= max, "{} not in [{}, {}]", n, min, max);
        }
    }

    #[test]
    fn prop_in_range_contained(seed in 1u32.., a in -1000.0f64..1000.0, width in 1.0f64..1000.0) {
        let mut rng = Srand::new(seed).unwrap();
        let b = a + width;
        for _ in 0..20 {
            let x = rng.in_range(a, b);
            prop_assert!(x >= a && x < b, "{} not in [{}, {})", x, a, b);
        }
    }

    #[test]
    fn prop_shuffle_preserves_multiset(seed in 1u32.., items in proptest::collection::vec(0u8..10, 0..40)) {
        let mut items = items;
        let mut rng = Srand::new(seed).unwrap();
        let mut expected = items.clone();
        rng.shuffle(&mut items);
        items.sort();
        expected.sort();
        prop_assert_eq!(items, expected);
    }
}
