//! Deduplication of word sequences through interchangeable strategies.
//!
//! Every strategy implements [`Dedup`], which returns each distinct value of
//! the input exactly once. Where that value ends up in the output is given by
//! [`Dedup::order`]: either where it first occurred, or in ascending order.
//!
//! | strategy         | order            | comparisons | mutates caller |
//! |------------------|------------------|-------------|----------------|
//! | [`BasicDedup`]   | first occurrence | O(n²)       | in place only  |
//! | [`SortDedup`]    | sorted           | O(n log n)  | in place only  |
//! | [`HashSetDedup`] | first occurrence | O(n)        | never          |
//! | [`TreeSetDedup`] | sorted           | O(n log n)  | never          |
//! | [`ListDedup`]    | first occurrence | O(n²)       | never          |
//!
//! [`Dedup::dedup`] never touches the caller's slice. The two strategies that
//! work by rearranging a buffer also implement [`DedupInPlace`], which reuses
//! the caller's `Vec` instead of cloning it.

mod basic;
mod collection;
mod sort;
mod strategy;

#[cfg(test)]
mod proptest;

use hashbrown::HashSet;
use std::hash::Hash;

pub use crate::{
    basic::{BasicDedup, count_comparisons, is_duplicate},
    collection::{
        Collection, CollectionDedup, HashSetDedup, InsertionOrderedSet, ListDedup, TreeSetDedup,
    },
    sort::SortDedup,
    strategy::{Strategy, UnknownStrategy},
};

/// Position of each retained value in the output of a strategy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// A value is placed where it first occurred in the input.
    FirstOccurrence,
    /// Values are in ascending order.
    Sorted,
}

/// A deduplication strategy.
pub trait Dedup<T> {
    /// Lower case name, used in output file names.
    fn name(&self) -> &'static str;

    fn order(&self) -> Order;

    /// Returns every distinct value of `words` exactly once, in [`Self::order`].
    ///
    /// `words` is left untouched. Scratch space owned by the strategy is
    /// reused between calls, hence `&mut self`.
    fn dedup(&mut self, words: &[T]) -> Vec<T>;
}

/// A strategy that can deduplicate by rearranging the caller's buffer.
pub trait DedupInPlace<T>: Dedup<T> {
    /// Moves the retained values to the front of `words` and truncates it.
    ///
    /// The relative order of `words` is not preserved beyond what
    /// [`Dedup::order`] promises.
    fn dedup_in_place(&mut self, words: &mut Vec<T>);
}

/// Brute force deduplication. See [`BasicDedup`].
#[must_use]
pub fn basic_dedup<T: PartialEq + Clone>(words: &[T]) -> Vec<T> {
    BasicDedup.dedup(words)
}

/// Deduplication by sorting a copy first. See [`SortDedup`].
#[must_use]
pub fn sort_dedup<T: Ord + Clone>(words: &[T]) -> Vec<T> {
    SortDedup.dedup(words)
}

/// Deduplication through a hash set. See [`HashSetDedup`].
#[must_use]
pub fn hash_set_dedup<T: Eq + Hash + Clone>(words: &[T]) -> Vec<T> {
    HashSetDedup::<T>::new().dedup(words)
}

/// Deduplication through an ordered set. See [`TreeSetDedup`].
#[must_use]
pub fn tree_set_dedup<T: Ord + Clone>(words: &[T]) -> Vec<T> {
    TreeSetDedup::<T>::new().dedup(words)
}

/// Deduplication through a growable list. See [`ListDedup`].
#[must_use]
pub fn list_dedup<T: PartialEq + Clone>(words: &[T]) -> Vec<T> {
    ListDedup::<T>::new().dedup(words)
}

/// Checks that `deduped` is a correct deduplication of `original`: it holds
/// every distinct value of `original`, nothing else, and nothing twice.
///
/// Order is not checked.
#[must_use]
pub fn is_correct_dedup<T: Eq + Hash>(original: &[T], deduped: &[T]) -> bool {
    let distinct: HashSet<&T> = original.iter().collect();
    let produced: HashSet<&T> = deduped.iter().collect();
    produced.len() == deduped.len() && produced == distinct
}

#[cfg(test)]
mod test {
    use super::*;
    use expect_test::expect;
    use std::fmt::Write as _;

    fn words(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_owned).collect()
    }

    #[test]
    fn every_strategy_on_a_sentence() {
        let input = words("to be or not to be that is the question whether tis nobler");
        let mut table = String::new();
        for strategy in Strategy::ALL {
            let output = strategy.dedup(&input);
            writeln!(table, "{strategy}: {}", output.join(" ")).unwrap();
        }
        expect![[r#"
            basic: to be or not that is the question whether tis nobler
            sort: be is nobler not or question that the tis to whether
            hashset: to be or not that is the question whether tis nobler
            treeset: be is nobler not or question that the tis to whether
            list: to be or not that is the question whether tis nobler
        "#]]
        .assert_eq(&table);
    }

    #[test]
    fn free_functions_match_strategies() {
        let input = words("b a b a c");
        assert_eq!(basic_dedup(&input), Strategy::Basic.dedup(&input));
        assert_eq!(sort_dedup(&input), Strategy::Sort.dedup(&input));
        assert_eq!(hash_set_dedup(&input), Strategy::HashSet.dedup(&input));
        assert_eq!(tree_set_dedup(&input), Strategy::TreeSet.dedup(&input));
        assert_eq!(list_dedup(&input), Strategy::List.dedup(&input));
    }

    #[test]
    fn dedup_leaves_input_untouched() {
        let input = words("c b a c b a");
        let before = input.clone();
        for strategy in Strategy::ALL {
            let _: Vec<String> = strategy.dedup(&input);
            assert_eq!(input, before, "{strategy}");
        }
    }

    #[test]
    fn correct_dedup_check() {
        let original = words("a b a c b");
        assert!(is_correct_dedup(&original, &words("a b c")));
        assert!(is_correct_dedup(&original, &words("c a b")));
        assert!(!is_correct_dedup(&original, &words("a b")));
        assert!(!is_correct_dedup(&original, &words("a b c d")));
        assert!(!is_correct_dedup(&original, &words("a a c")));
        assert!(!is_correct_dedup(&original, &words("a b c c")));
        assert!(is_correct_dedup::<String>(&[], &[]));
    }
}
