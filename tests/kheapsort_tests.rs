use classic_algos::sort::k_sorted_sequence;
use classic_algos::{kheapsort, kheapsort_checked, lis, powerset, Error};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::cmp::Ordering;

/// Ordered by key only, so equal keys with different labels tie
#[derive(Debug, Eq)]
struct Labeled(u8, char);

impl PartialEq for Labeled {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for Labeled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Labeled {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

#[test]
fn test_one_bounded_arrays_sort() {
    // Every arrangement where each element is at most one place off: adjacent swaps
    let base: Vec<u32> = (0..8).collect();
    for mask in 0u32..(1 << 7) {
        let mut data = base.clone();
        let mut i = 0;
        while i < 7 {
            if mask & (1 << i) != 0 {
                data.swap(i, i + 1);
                i += 2;
            } else {
                i += 1;
            }
        }
        assert_eq!(kheapsort(data, 1), base);
    }
}

#[test]
fn test_random_k_bounded_sequences_sort() {
    let mut rng = StdRng::seed_from_u64(1234);
    for k in [0, 1, 2, 5, 17, 64] {
        for n in [0, 1, 10, 100, 1000] {
            let data = k_sorted_sequence(&mut rng, n, k);
            let mut expected = data.clone();
            expected.sort();
            assert_eq!(kheapsort(data.clone(), k), expected, "n = {}, k = {}", n, k);
            assert_eq!(kheapsort_checked(data, k), Ok(expected));
        }
    }
}

#[test]
fn test_full_window_sorts_any_permutation() {
    let mut rng = StdRng::seed_from_u64(77);
    let mut data: Vec<i64> = (-50..50).collect();
    data.shuffle(&mut rng);
    let sorted = kheapsort(data.clone(), data.len());
    assert!(is_sorted(&sorted));
}

#[test]
fn test_violation_is_detected() {
    let data: Vec<u32> = (0..20).rev().collect();
    assert!(matches!(
        kheapsort_checked(data, 3),
        Err(Error::KBoundViolation { k: 3, .. })
    ));
}

#[test]
fn test_sequence_helpers() {
    assert_eq!(lis(&[5, 1, 3, 4, 7]), 4);
    let subsets = powerset(&[1, 2, 3]);
    assert_eq!(subsets.len(), 8);
    assert!(subsets.contains(&vec![1, 3]));
}

#[test]
fn test_kheapsort_examples() {
    assert_eq!(kheapsort(vec![1, 2, 3, 4, 5], 0), vec![1, 2, 3, 4, 5]);
    assert_eq!(kheapsort(vec![3, 2, 1, 5, 4], 2), vec![1, 2, 3, 4, 5]);
    assert_eq!(kheapsort(vec![5, 4, 3, 2, 1], 4), vec![1, 2, 3, 4, 5]);
    assert_eq!(kheapsort(vec![3, 12, 5, 1, 6], 3), vec![1, 3, 5, 6, 12]);
}

#[test]
fn test_kheapsort_edge_cases() {
    assert_eq!(kheapsort(Vec::<i32>::new(), 3), Vec::<i32>::new());
    assert_eq!(kheapsort(vec![7], 0), vec![7]);
    // k past the end degenerates to a plain heap sort
    assert_eq!(kheapsort(vec![9, 1, 8, 2], 10), vec![1, 2, 8, 9]);
}

#[test]
fn test_equal_keys_keep_input_order() {
    let input = vec![
        Labeled(2, 'a'),
        Labeled(1, 'b'),
        Labeled(2, 'c'),
        Labeled(1, 'd'),
    ];
    let labels: Vec<char> = kheapsort(input, 3).iter().map(|l| l.1).collect();
    assert_eq!(labels, vec!['b', 'd', 'a', 'c']);
}

#[test]
fn test_checked_reports_first_out_of_order_index() {
    assert_eq!(kheapsort_checked(vec![2, 1, 3], 1), Ok(vec![1, 2, 3]));
    // 1 is two places late for k = 1
    assert_eq!(
        kheapsort_checked(vec![2, 3, 1], 1),
        Err(Error::KBoundViolation { k: 1, index: 1 })
    );
}
