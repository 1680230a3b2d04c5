//! Brute force deduplication.
//!
//! The accepted values are kept as a prefix of the buffer. Every candidate is
//! compared against the whole prefix before it may join it, so a sequence of
//! `n` distinct values costs `n(n-1)/2` comparisons, while `n` copies of one
//! value cost `n-1`.

use crate::{Dedup, DedupInPlace, Order};

/// Quadratic deduplication by scanning every previously accepted value.
#[derive(Default, Debug, Clone, Copy)]
pub struct BasicDedup;

impl<T: PartialEq + Clone> Dedup<T> for BasicDedup {
    fn name(&self) -> &'static str {
        "basic"
    }
    fn order(&self) -> Order {
        Order::FirstOccurrence
    }
    fn dedup(&mut self, words: &[T]) -> Vec<T> {
        let mut words = words.to_vec();
        self.dedup_in_place(&mut words);
        words
    }
}

impl<T: PartialEq + Clone> DedupInPlace<T> for BasicDedup {
    fn dedup_in_place(&mut self, words: &mut Vec<T>) {
        compact(words, is_duplicate);
    }
}

/// Whether `candidate` equals any of the `accepted` values.
pub fn is_duplicate<T: PartialEq>(accepted: &[T], candidate: &T) -> bool {
    scan(accepted, candidate).0
}

/// Runs the brute force algorithm on `words` in place and returns the number
/// of equality comparisons it made.
pub fn count_comparisons<T: PartialEq>(words: &mut Vec<T>) -> usize {
    let mut comparisons = 0;
    compact(words, |accepted, candidate| {
        let (duplicate, scanned) = scan(accepted, candidate);
        comparisons += scanned;
        duplicate
    });
    comparisons
}

/// Returns whether a duplicate was found, and the number of comparisons made.
fn scan<T: PartialEq>(accepted: &[T], candidate: &T) -> (bool, usize) {
    match accepted.iter().position(|w| w == candidate) {
        Some(i) => (true, i + 1),
        None => (false, accepted.len()),
    }
}

/// Moves the first occurrence of every value to the front, in order, then
/// truncates. `duplicate` is asked about every value against the accepted
/// prefix.
fn compact<T>(words: &mut Vec<T>, mut duplicate: impl FnMut(&[T], &T) -> bool) {
    let mut count = 0;
    for i in 0..words.len() {
        if !duplicate(&words[..count], &words[i]) {
            // words[count..i] only holds rejected values.
            words.swap(count, i);
            count += 1;
        }
    }
    words.truncate(count);
}
