//! Deduplication by sorting.

use crate::{Dedup, DedupInPlace, Order};

/// Sorts, then drops every value equal to its predecessor.
///
/// The output is in ascending order, not in order of first occurrence.
#[derive(Default, Debug, Clone, Copy)]
pub struct SortDedup;

impl<T: Ord + Clone> Dedup<T> for SortDedup {
    fn name(&self) -> &'static str {
        "sort"
    }
    fn order(&self) -> Order {
        Order::Sorted
    }
    fn dedup(&mut self, words: &[T]) -> Vec<T> {
        let mut words = words.to_vec();
        self.dedup_in_place(&mut words);
        words
    }
}

impl<T: Ord + Clone> DedupInPlace<T> for SortDedup {
    fn dedup_in_place(&mut self, words: &mut Vec<T>) {
        words.sort_unstable();
        dedup_sorted(words);
    }
}

/// dedup a sorted `vec`.
fn dedup_sorted<T: Ord>(vec: &mut Vec<T>) {
    if vec.len() <= 1 {
        return;
    }
    debug_assert!(vec.is_sorted());
    let mut i = 0;
    for j in 1..vec.len() {
        if vec[i] != vec[j] {
            i += 1;
            vec.swap(i, j);
        }
    }
    vec.truncate(i + 1);
}
