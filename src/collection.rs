//! The ordered collection engine.
//!
//! [`OrderedCollection`] keeps a sequence of elements and, depending on its mode, either
//! preserves insertion order or maintains ascending order under a [`Comparator`] with binary
//! search for lookup and insertion.

use crate::algo;
use crate::core::{Comparator, Natural};
use crate::error::{Error, Result};
use std::collections::VecDeque;
use std::collections::vec_deque;
use std::fmt;
use tracing::{debug, trace, warn};

/// A sequence that can keep itself sorted and, while sorted, free of duplicates.
///
/// # Modes
///
/// | `sorted` | `unique` | comparator | `include`                         | lookup             |
/// |----------|----------|------------|-----------------------------------|--------------------|
/// | `false`  | any      | none       | always appends                    | never finds        |
/// | `false`  | any      | present    | always appends                    | linear scan, O(n)  |
/// | `true`   | `false`  | present    | inserts at lower bound            | binary search      |
/// | `true`   | `true`   | present    | inserts at lower bound unless an equal element exists | binary search |
///
/// `unique` is only enforced while `sorted` is on. An unsorted collection accepts every
/// element whatever its `unique` flag says, and turning sorting on later does not remove
/// duplicates that were admitted in the meantime.
///
/// A sorted collection always has a comparator. Constructors and
/// [`CollectionBuilder`](crate::builder::CollectionBuilder) guarantee it, and
/// [`set_sorted`](Self::set_sorted) refuses to switch on sorting without one.
///
/// # Concurrency
///
/// There is no internal locking. Every mutating method takes `&mut self`; sharing a collection
/// between threads that mutate it requires wrapping it in a `Mutex` (or similar) supplied by
/// the caller.
///
/// # Examples
///
/// ```
/// use orderly::prelude::*;
///
/// let mut numbers = OrderedCollection::sorted(Natural, true);
/// assert!(numbers.include(3));
/// assert!(numbers.include(1));
/// assert!(numbers.include(2));
/// assert!(!numbers.include(3));
///
/// assert_eq!(numbers.to_vec(), vec![1, 2, 3]);
/// assert_eq!(numbers.index_of(&2), Some(1));
/// ```
#[derive(Clone)]
pub struct OrderedCollection<T, C = Natural> {
    items: VecDeque<T>,
    comparator: Option<C>,
    sorted: bool,
    unique: bool,
}

impl<T, C> OrderedCollection<T, C> {
    /// Creates an empty, unsorted collection without a comparator.
    ///
    /// Such a collection is append-only: lookups never find anything.
    pub fn new() -> Self {
        Self::from_parts(None, false, false)
    }

    /// Creates an empty, unsorted collection that looks items up by linear scan.
    pub fn with_comparator(comparator: C) -> Self {
        Self::from_parts(Some(comparator), false, false)
    }

    /// Creates an empty collection in sorted mode.
    pub fn sorted(comparator: C, unique: bool) -> Self {
        Self::from_parts(Some(comparator), true, unique)
    }

    pub(crate) fn from_parts(comparator: Option<C>, sorted: bool, unique: bool) -> Self {
        debug_assert!(!sorted || comparator.is_some());
        Self {
            items: VecDeque::new(),
            comparator,
            sorted,
            unique,
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    pub fn is_unique(&self) -> bool {
        self.unique
    }

    pub fn comparator(&self) -> Option<&C> {
        self.comparator.as_ref()
    }

    /// Iterates over the elements front to back.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.back()
    }

    /// Copies the elements into a `Vec`, front to back.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().cloned().collect()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items.into()
    }

    /// Removes every element. Mode flags and comparator are kept.
    pub fn reset(&mut self) {
        self.items.clear();
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the collection has no elements.
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop_front().ok_or(Error::Empty)
    }

    /// Drops the first `n` elements, or all of them if there are fewer.
    pub fn skip_head(&mut self, n: usize) {
        let n = n.min(self.items.len());
        self.items.drain(..n);
    }

    /// Drops the last `n` elements, or all of them if there are fewer.
    pub fn skip_tail(&mut self, n: usize) {
        let keep = self.items.len().saturating_sub(n);
        self.items.truncate(keep);
    }
}

impl<T, C: Comparator<T>> OrderedCollection<T, C> {
    /// Lower bound in sorted mode, first equal element otherwise, `len()` when lookup is
    /// impossible or fails.
    fn search(&self, item: &T) -> usize {
        match &self.comparator {
            Some(comparator) if self.sorted => algo::lower_bound(&self.items, item, comparator),
            Some(comparator) => algo::linear_search(&self.items, item, comparator),
            None => self.items.len(),
        }
    }

    fn matches(&self, index: usize, item: &T) -> bool {
        match (&self.comparator, self.items.get(index)) {
            (Some(comparator), Some(probe)) => comparator.equal(probe, item),
            _ => false,
        }
    }

    /// Returns `true` if an element equal to `item` is present.
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Returns the position of an element equal to `item`.
    ///
    /// In sorted mode this is the first of any run of equal elements.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        let index = self.search(item);
        self.matches(index, item).then_some(index)
    }

    /// Adds `item`, returning whether it was stored.
    ///
    /// Unsorted collections always append. Sorted collections insert at the lower bound of
    /// `item`, after shifting later elements, and reject the item if `unique` is set and an
    /// equal element is already present.
    pub fn include(&mut self, item: T) -> bool {
        if self.items.is_empty() || !self.sorted {
            self.items.push_back(item);
            return true;
        }

        let index = self.search(&item);
        if index == self.items.len() {
            self.items.push_back(item);
            return true;
        }
        if self.unique && self.matches(index, &item) {
            return false;
        }

        self.items.insert(index, item);
        true
    }

    /// Removes one element equal to `item`, returning whether anything was removed.
    pub fn exclude(&mut self, item: &T) -> bool {
        let index = self.search(item);
        if !self.matches(index, item) {
            return false;
        }
        self.items.remove(index).is_some()
    }

    /// Same as [`include`](Self::include).
    pub fn push(&mut self, item: T) -> bool {
        self.include(item)
    }

    /// Includes every item in order.
    pub fn push_multiple<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.include(item);
        }
    }

    /// Switches sorted mode on or off.
    ///
    /// Switching on re-sorts the current content (stably, so equal elements keep their
    /// relative order). Duplicates already present are kept even if `unique` is set.
    /// Switching off leaves the content as it is.
    ///
    /// # Errors
    ///
    /// [`Error::MissingComparator`] if sorting is requested and there is no comparator. The
    /// collection is left unchanged.
    pub fn set_sorted(&mut self, sorted: bool) -> Result<()> {
        if self.sorted == sorted {
            return Ok(());
        }

        if sorted {
            let Some(comparator) = &self.comparator else {
                warn!("cannot enable sorting without a comparator");
                return Err(Error::MissingComparator);
            };
            debug!(len = self.items.len(), "re-sorting collection");
            self.items
                .make_contiguous()
                .sort_by(|a, b| comparator.compare(a, b));
        }

        self.sorted = sorted;
        Ok(())
    }

    fn algebra_comparator(&self, operation: &'static str) -> Result<&C> {
        match &self.comparator {
            Some(comparator) if self.sorted => Ok(comparator),
            _ => {
                warn!(operation, "set operation on an unsorted collection");
                Err(Error::NotSorted)
            }
        }
    }

    /// Merges `self` with `other` into a new sorted collection.
    ///
    /// On ties the element from `self` comes first; the one from `other` is dropped when
    /// `unique` is set and kept right after it otherwise. The result uses `self`'s comparator
    /// and has its `unique` flag set to `unique`. Neither operand is modified and the result
    /// never shares storage with them, even when one side is empty.
    ///
    /// `other` must be ascending under `self`'s comparator.
    ///
    /// # Errors
    ///
    /// [`Error::NotSorted`] if `self` is not in sorted mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use orderly::prelude::*;
    ///
    /// let mut a = OrderedCollection::sorted(Natural, true);
    /// a.push_multiple([1, 3, 5]);
    /// let mut b = OrderedCollection::sorted(Natural, true);
    /// b.push_multiple([2, 3, 4]);
    ///
    /// assert_eq!(a.add(&b, true).unwrap().to_vec(), vec![1, 2, 3, 4, 5]);
    /// assert_eq!(a.add(&b, false).unwrap().to_vec(), vec![1, 2, 3, 3, 4, 5]);
    /// ```
    pub fn add(&self, other: &Self, unique: bool) -> Result<Self>
    where
        T: Clone,
        C: Clone,
    {
        let comparator = self.algebra_comparator("add")?;

        let mut items = VecDeque::with_capacity(self.items.len() + other.items.len());
        algo::merge(&self.items, &other.items, comparator, unique, &mut items);
        trace!(
            left = self.items.len(),
            right = other.items.len(),
            merged = items.len(),
            "merged collections"
        );

        Ok(Self {
            items,
            comparator: Some(comparator.clone()),
            sorted: true,
            unique,
        })
    }

    /// Returns a new sorted collection with the elements of `self` that have no equal
    /// counterpart in `other`, in their original order.
    ///
    /// The result keeps `self`'s comparator and `unique` flag. Neither operand is modified.
    ///
    /// # Errors
    ///
    /// [`Error::NotSorted`] if `self` is not in sorted mode.
    pub fn sub(&self, other: &Self) -> Result<Self>
    where
        T: Clone,
        C: Clone,
    {
        let comparator = self.algebra_comparator("sub")?;

        let mut items = VecDeque::with_capacity(self.items.len());
        algo::difference(&self.items, &other.items, comparator, &mut items);
        trace!(
            left = self.items.len(),
            right = other.items.len(),
            remaining = items.len(),
            "subtracted collections"
        );

        Ok(Self {
            items,
            comparator: Some(comparator.clone()),
            sorted: true,
            unique: self.unique,
        })
    }
}

impl<T, C> Default for OrderedCollection<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for OrderedCollection<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedCollection")
            .field("items", &self.items)
            .field("sorted", &self.sorted)
            .field("unique", &self.unique)
            .field("has_comparator", &self.comparator.is_some())
            .finish()
    }
}

impl<T, C: Comparator<T>> Extend<T> for OrderedCollection<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_multiple(iter);
    }
}

impl<T, C> IntoIterator for OrderedCollection<T, C> {
    type Item = T;
    type IntoIter = vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a OrderedCollection<T, C> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
