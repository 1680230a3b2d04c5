//! Deduplication through a container that refuses values it already holds.

use crate::{Dedup, Order};
use hashbrown::HashSet;
use std::{collections::BTreeSet, hash::Hash, mem};

/// Container used by [`CollectionDedup`].
pub trait Collection<T> {
    const NAME: &'static str;
    /// Order in which [`Self::drain_into`] yields values.
    const ORDER: Order;

    fn clear(&mut self);
    /// Adds `value` unless an equal value is already present. Returns whether
    /// it was added.
    fn add(&mut self, value: &T) -> bool;
    /// Moves every value into `out`, leaving the collection empty.
    fn drain_into(&mut self, out: &mut Vec<T>);
}

/// Feeds every word into a [`Collection`] and returns what it kept.
///
/// The collection is owned so that its allocation survives between calls.
#[derive(Default, Debug, Clone)]
pub struct CollectionDedup<C> {
    coll: C,
}

impl<C: Default> CollectionDedup<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T, C: Collection<T>> Dedup<T> for CollectionDedup<C> {
    fn name(&self) -> &'static str {
        C::NAME
    }
    fn order(&self) -> Order {
        C::ORDER
    }
    fn dedup(&mut self, words: &[T]) -> Vec<T> {
        self.coll.clear();
        for word in words {
            self.coll.add(word);
        }
        let mut out = Vec::new();
        self.coll.drain_into(&mut out);
        out
    }
}

/// Linear membership test on a list, quadratic overall.
pub type ListDedup<T> = CollectionDedup<Vec<T>>;
/// Hash set membership, first occurrence order.
pub type HashSetDedup<T> = CollectionDedup<InsertionOrderedSet<T>>;
/// Ordered set, sorted output.
pub type TreeSetDedup<T> = CollectionDedup<BTreeSet<T>>;

impl<T: PartialEq + Clone> Collection<T> for Vec<T> {
    const NAME: &'static str = "list";
    const ORDER: Order = Order::FirstOccurrence;

    fn clear(&mut self) {
        Vec::clear(self);
    }
    fn add(&mut self, value: &T) -> bool {
        if self.contains(value) {
            return false;
        }
        self.push(value.clone());
        true
    }
    fn drain_into(&mut self, out: &mut Vec<T>) {
        out.append(self);
    }
}

impl<T: Ord + Clone> Collection<T> for BTreeSet<T> {
    const NAME: &'static str = "treeset";
    const ORDER: Order = Order::Sorted;

    fn clear(&mut self) {
        BTreeSet::clear(self);
    }
    fn add(&mut self, value: &T) -> bool {
        if self.contains(value) {
            return false;
        }
        self.insert(value.clone())
    }
    fn drain_into(&mut self, out: &mut Vec<T>) {
        out.extend(mem::take(self));
    }
}

/// Hash set that remembers insertion order.
///
/// Membership is decided by the hash set alone, iteration goes through the
/// insertion log, so output never depends on the hasher.
#[derive(Debug, Clone)]
pub struct InsertionOrderedSet<T> {
    seen: HashSet<T>,
    log: Vec<T>,
}

impl<T> Default for InsertionOrderedSet<T> {
    fn default() -> Self {
        Self {
            seen: HashSet::new(),
            log: Vec::new(),
        }
    }
}

impl<T: Eq + Hash + Clone> Collection<T> for InsertionOrderedSet<T> {
    const NAME: &'static str = "hashset";
    const ORDER: Order = Order::FirstOccurrence;

    fn clear(&mut self) {
        self.seen.clear();
        self.log.clear();
    }
    fn add(&mut self, value: &T) -> bool {
        if self.seen.contains(value) {
            return false;
        }
        self.seen.insert(value.clone());
        self.log.push(value.clone());
        true
    }
    fn drain_into(&mut self, out: &mut Vec<T>) {
        self.seen.clear();
        out.append(&mut self.log);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn list_add_reports_membership() {
        let mut list: Vec<&str> = Vec::new();
        assert!(list.add(&"a"));
        assert!(list.add(&"b"));
        assert!(!list.add(&"a"));
        assert_eq!(list, ["a", "b"]);
    }

    #[test]
    fn insertion_ordered_set_keeps_first_occurrence_order() {
        let mut set: InsertionOrderedSet<&str> = InsertionOrderedSet::default();
        for w in ["z", "y", "z", "x", "y"] {
            set.add(&w);
        }
        assert_eq!(set.log, ["z", "y", "x"]);
        assert_eq!(set.seen.len(), 3);

        let mut out = vec!["w"];
        set.drain_into(&mut out);
        assert_eq!(out, ["w", "z", "y", "x"]);
        assert!(set.log.is_empty() && set.seen.is_empty());
        assert!(set.add(&"z"), "drain must forget seen values");
    }

    #[test]
    fn tree_set_drains_sorted() {
        let mut set: BTreeSet<&str> = BTreeSet::new();
        for w in ["c", "a", "b", "a"] {
            Collection::add(&mut set, &w);
        }
        let mut out = Vec::new();
        set.drain_into(&mut out);
        assert_eq!(out, ["a", "b", "c"]);
        assert!(set.is_empty());
    }

    #[test]
    fn scratch_is_cleared_between_calls() {
        let mut dedup: HashSetDedup<&str> = HashSetDedup::new();
        assert_eq!(dedup.dedup(&["a", "b", "a"]), ["a", "b"]);
        assert_eq!(dedup.dedup(&["b", "c"]), ["b", "c"]);

        let mut dedup: ListDedup<&str> = ListDedup::new();
        assert_eq!(dedup.dedup(&["a", "b", "a"]), ["a", "b"]);
        assert_eq!(dedup.dedup(&["b"]), ["b"]);

        let mut dedup: TreeSetDedup<&str> = TreeSetDedup::new();
        assert_eq!(dedup.dedup(&["b", "a"]), ["a", "b"]);
        assert_eq!(dedup.dedup(&[]), [] as [&str; 0]);
    }

    #[test]
    fn names_and_orders() {
        assert_eq!(Dedup::<String>::name(&ListDedup::<String>::new()), "list");
        assert_eq!(
            Dedup::<String>::order(&HashSetDedup::<String>::new()),
            Order::FirstOccurrence
        );
        assert_eq!(
            Dedup::<String>::order(&TreeSetDedup::<String>::new()),
            Order::Sorted
        );
    }
}
