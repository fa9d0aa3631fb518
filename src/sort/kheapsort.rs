//! Heap sort for nearly sorted input.
//!
//! When every element sits at most `k` positions away from where it belongs,
//! a min-heap of `k + 1` elements is enough to emit the sorted sequence in
//! O(n log k).

use std::fmt::Debug;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::data_structures::MinPriorityQueue;
use crate::{Error, Result};

/// Sorts `items`, assuming each one is at most `k` positions from its sorted position.
///
/// The bound is not checked: input that violates it comes back in an
/// unspecified order. Equal elements keep their input order.
pub fn kheapsort<T>(items: Vec<T>, k: usize) -> Vec<T>
where
    T: Ord + Debug,
{
    let mut output = Vec::with_capacity(items.len());
    let mut heap = MinPriorityQueue::with_capacity(k.min(items.len()) + 1);
    let mut items = items.into_iter().enumerate();

    // Heap entries are (input index, item); the item is the priority
    heap.extend(items.by_ref().take(k));

    for (index, item) in items {
        heap.push(index, item);
        if let Some((_, min)) = heap.pop() {
            output.push(min);
        }
    }

    while let Some((_, min)) = heap.pop() {
        output.push(min);
    }

    output
}

/// Like [`kheapsort`], but fails when the result is out of order, which is
/// exactly when the input broke the `k` bound in a way that mattered.
pub fn kheapsort_checked<T>(items: Vec<T>, k: usize) -> Result<Vec<T>>
where
    T: Ord + Debug,
{
    let sorted = kheapsort(items, k);
    match sorted.windows(2).position(|pair| pair[0] > pair[1]) {
        Some(i) => {
            debug!("Output out of order at {}: input was not {}-sorted", i + 1, k);
            Err(Error::KBoundViolation { k, index: i + 1 })
        }
        None => Ok(sorted),
    }
}

/// Random sequence of `n` values in which every element is at most `k`
/// positions away from its sorted position.
pub fn k_sorted_sequence<R: Rng>(rng: &mut R, n: usize, k: usize) -> Vec<u32> {
    let upper = u32::try_from(n).unwrap_or(u32::MAX).saturating_mul(4).max(1);
    let mut values: Vec<u32> = (0..n).map(|_| rng.gen_range(0..upper)).collect();
    values.sort_unstable();

    // Shuffling disjoint windows of k + 1 moves nothing further than k
    for window in values.chunks_mut(k.saturating_add(1)) {
        window.shuffle(rng);
    }

    values
}
