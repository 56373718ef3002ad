use std::{collections::BTreeSet, hash::Hash};

use itertools::Itertools;

use crate::Show;

/// Type alias for sets, we use this to hide which type of `HashSet` we are actually using.
pub type Set<S> = fxhash::FxHashSet<S>;
/// Type alias for maps, we use this to hide which type of `HashMap` we are actually using.
pub type Map<K, V> = fxhash::FxHashMap<K, V>;

/// Represents a bijective mapping between `L` and `R`, that is a mapping which associates
/// each `L` with precisely one `R` and vice versa.
pub type Bijection<L, R> = bimap::BiBTreeMap<L, R>;

/// A partition is a different view on a congruence relation, by grouping elements of
/// type `I` into their respective classes under the relation. The classes are kept in
/// the order in which they were established, each class iterates its elements in
/// ascending order.
#[derive(Debug, Clone)]
pub struct Partition<I: Hash + Eq>(Vec<BTreeSet<I>>);

impl<I: Hash + Eq> std::ops::Deref for Partition<I> {
    type Target = Vec<BTreeSet<I>>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a, I: Hash + Eq> IntoIterator for &'a Partition<I> {
    type Item = &'a BTreeSet<I>;
    type IntoIter = std::slice::Iter<'a, BTreeSet<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<I: Hash + Eq> IntoIterator for Partition<I> {
    type Item = BTreeSet<I>;
    type IntoIter = std::vec::IntoIter<BTreeSet<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Two partitions are equal if they consist of the same classes, regardless of the
/// order in which the classes were established.
impl<I: Hash + Eq> PartialEq for Partition<I> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|o| other.contains(o))
    }
}
impl<I: Hash + Eq> Eq for Partition<I> {}

impl<I: Hash + Eq + Ord> Partition<I> {
    /// Returns the size of the partition, i.e. the number of classes.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Builds a new partition from an iterator that yields iterators which yield elements
    /// of type `I`. Empty classes are dropped.
    pub fn new<X: IntoIterator<Item = I>, Y: IntoIterator<Item = X>>(iter: Y) -> Self {
        Self(
            iter.into_iter()
                .map(|it| it.into_iter().collect::<BTreeSet<_>>())
                .filter(|class| !class.is_empty())
                .collect(),
        )
    }

    /// Returns the position of the class that contains `element`, if any.
    pub fn class_of(&self, element: &I) -> Option<usize> {
        self.0.iter().position(|class| class.contains(element))
    }

    /// Builds a lookup table that maps every element to the position of its class. This
    /// is the fast path for repeated [`Self::class_of`] queries.
    pub fn class_index(&self) -> Map<&I, usize> {
        self.0
            .iter()
            .enumerate()
            .flat_map(|(i, class)| class.iter().map(move |element| (element, i)))
            .collect()
    }

    /// Returns true if every class consists of exactly one element, meaning the
    /// underlying relation is the identity.
    pub fn is_discrete(&self) -> bool {
        self.0.iter().all(|class| class.len() == 1)
    }

    /// Returns the total number of elements over all classes.
    pub fn elements(&self) -> usize {
        self.0.iter().map(|class| class.len()).sum()
    }
}

impl<I: Hash + Eq + Ord> From<Vec<BTreeSet<I>>> for Partition<I> {
    fn from(value: Vec<BTreeSet<I>>) -> Self {
        Self(value)
    }
}

impl<I: Hash + Eq + Show> Show for Partition<I> {
    fn show(&self) -> String {
        format!(
            "[{}]",
            self.0
                .iter()
                .map(|class| format!("{{{}}}", class.iter().map(|q| q.show()).join(", ")))
                .join(", ")
        )
    }
}
