//! Hash-backed set with sorted output.
//!
//! Unlike [`OrderedCollection`](crate::collection::OrderedCollection), membership here is
//! decided by `Eq + Hash` and order only matters when values are read out.

use rustc_hash::FxHashSet;
use std::hash::Hash;

/// A set of distinct values that lists its content in ascending order.
///
/// ```
/// use orderly::set::HashedSet;
///
/// let mut tags: HashedSet<&str> = ["rust", "sorting", "rust"].into_iter().collect();
/// tags.insert("merge");
///
/// assert_eq!(tags.len(), 3);
/// assert_eq!(tags.values(), vec!["merge", "rust", "sorting"]);
/// ```
#[derive(Clone, Debug)]
pub struct HashedSet<T> {
    values: FxHashSet<T>,
}

impl<T: Eq + Hash> HashedSet<T> {
    pub fn new() -> Self {
        Self {
            values: FxHashSet::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Adds `value`, returning `false` if it was already present.
    pub fn insert(&mut self, value: T) -> bool {
        self.values.insert(value)
    }

    /// Removes `value`, returning whether it was present.
    pub fn remove(&mut self, value: &T) -> bool {
        self.values.remove(value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.values.contains(value)
    }

    /// Returns the values sorted ascending.
    pub fn values(&self) -> Vec<T>
    where
        T: Ord + Clone,
    {
        let mut values: Vec<T> = self.values.iter().cloned().collect();
        values.sort_unstable();
        values
    }
}

impl<T: Eq + Hash> Default for HashedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> Extend<T> for HashedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl<T: Eq + Hash> FromIterator<T> for HashedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Eq + Hash> PartialEq for HashedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<T: Eq + Hash> Eq for HashedSet<T> {}

/// Collects the distinct values of every list, sorted ascending.
///
/// ```
/// use orderly::set::union;
///
/// assert_eq!(union(&[&[3, 1, 3][..], &[2, 1][..]]), vec![1, 2, 3]);
/// ```
pub fn union<T: Eq + Hash + Ord + Clone>(lists: &[&[T]]) -> Vec<T> {
    lists
        .iter()
        .flat_map(|list| list.iter().cloned())
        .collect::<HashedSet<T>>()
        .values()
}
