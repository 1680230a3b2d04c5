//! Selecting a strategy by name.

use crate::{BasicDedup, Dedup, HashSetDedup, ListDedup, Order, SortDedup, TreeSetDedup};
use std::{fmt, hash::Hash, str::FromStr};

/// Every deduplication strategy in this crate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strategy {
    /// [`BasicDedup`]
    Basic,
    /// [`SortDedup`]
    Sort,
    /// [`HashSetDedup`]
    HashSet,
    /// [`TreeSetDedup`]
    TreeSet,
    /// [`ListDedup`]
    List,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Basic,
        Strategy::Sort,
        Strategy::HashSet,
        Strategy::TreeSet,
        Strategy::List,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Basic => "basic",
            Strategy::Sort => "sort",
            Strategy::HashSet => "hashset",
            Strategy::TreeSet => "treeset",
            Strategy::List => "list",
        }
    }

    #[must_use]
    pub fn order(self) -> Order {
        match self {
            Strategy::Basic | Strategy::HashSet | Strategy::List => Order::FirstOccurrence,
            Strategy::Sort | Strategy::TreeSet => Order::Sorted,
        }
    }

    /// Whether the strategy also implements [`crate::DedupInPlace`].
    #[must_use]
    pub fn is_destructive(self) -> bool {
        matches!(self, Strategy::Basic | Strategy::Sort)
    }

    /// A fresh strategy object, for callers that want to hold on to its
    /// scratch space.
    #[must_use]
    pub fn build<T: Ord + Hash + Clone + 'static>(self) -> Box<dyn Dedup<T>> {
        match self {
            Strategy::Basic => Box::new(BasicDedup),
            Strategy::Sort => Box::new(SortDedup),
            Strategy::HashSet => Box::new(HashSetDedup::<T>::new()),
            Strategy::TreeSet => Box::new(TreeSetDedup::<T>::new()),
            Strategy::List => Box::new(ListDedup::<T>::new()),
        }
    }

    #[must_use]
    pub fn dedup<T: Ord + Hash + Clone>(self, words: &[T]) -> Vec<T> {
        match self {
            Strategy::Basic => BasicDedup.dedup(words),
            Strategy::Sort => SortDedup.dedup(words),
            Strategy::HashSet => HashSetDedup::<T>::new().dedup(words),
            Strategy::TreeSet => TreeSetDedup::<T>::new().dedup(words),
            Strategy::List => ListDedup::<T>::new().dedup(words),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Name that matches no [`Strategy`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown strategy {:?}, expected one of: ", self.0)?;
        for (i, strategy) in Strategy::ALL.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{strategy}")?;
        }
        Ok(())
    }
}

impl std::error::Error for UnknownStrategy {}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    /// Case insensitive. Also accepts the class style names, e.g. `HashSetDedup`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let name = lower.strip_suffix("dedup").unwrap_or(&lower);
        match name {
            "basic" => Ok(Strategy::Basic),
            "sort" => Ok(Strategy::Sort),
            "hashset" => Ok(Strategy::HashSet),
            "treeset" => Ok(Strategy::TreeSet),
            "list" | "arraylist" => Ok(Strategy::List),
            _ => Err(UnknownStrategy(s.to_owned())),
        }
    }
}
