//! Drainable containers.
//!
//! [`Drainable`] is the capability shared by a plain insertion-order queue ([`Fifo`]) and a
//! comparator-ordered queue ([`SortedQueue`]), so consumers can pop bounded runs of items
//! without caring which ordering backs them.

use crate::collection::OrderedCollection;
use crate::core::{Comparator, Natural};
use crate::error::{Error, Result};
use std::collections::VecDeque;

/// A container that hands out its earliest element first.
///
/// "Earliest" is defined by the implementor: insertion order for [`Fifo`], comparator order
/// for [`SortedQueue`].
///
/// The trait is object safe:
///
/// ```
/// use orderly::prelude::*;
///
/// let mut queues: Vec<Box<dyn Drainable<i32>>> = vec![
///     Box::new(Fifo::<i32>::new()),
///     Box::new(SortedQueue::<i32>::new(Natural)),
/// ];
/// for queue in &mut queues {
///     queue.push(2);
///     queue.push(1);
/// }
/// assert_eq!(queues[0].pop(), Ok(2));
/// assert_eq!(queues[1].pop(), Ok(1));
/// ```
pub trait Drainable<T> {
    /// Removes every element.
    fn reset(&mut self);

    fn push(&mut self, item: T);

    /// Removes and returns the earliest element.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] when there is nothing to remove.
    fn pop(&mut self) -> Result<T>;

    /// Pops elements while `predicate` accepts them.
    ///
    /// The earliest element is offered to `predicate` and removed only if it returns `true`.
    /// The first rejected element stays in place.
    fn drain_while(&mut self, predicate: &mut dyn FnMut(&T) -> bool);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An insertion-order queue.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fifo<T> {
    items: VecDeque<T>,
}

impl<T> Fifo<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Appends every item in order.
    pub fn push_multiple<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.items.extend(items);
    }

    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Drainable<T> for Fifo<T> {
    fn reset(&mut self) {
        self.items.clear();
    }

    fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    fn pop(&mut self) -> Result<T> {
        self.items.pop_front().ok_or(Error::Empty)
    }

    fn drain_while(&mut self, predicate: &mut dyn FnMut(&T) -> bool) {
        while let Some(item) = self.items.front() {
            if !predicate(item) {
                return;
            }
            self.items.pop_front();
        }
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Extend<T> for Fifo<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_multiple(iter);
    }
}

/// A queue that hands out elements in comparator order.
///
/// Wraps a sorted, non-unique [`OrderedCollection`] that it owns exclusively. Each push lands
/// at the lower bound of its value, so among equal elements the most recently pushed one comes
/// out first.
///
/// ```
/// use orderly::prelude::*;
///
/// let mut deadlines = SortedQueue::new(Natural);
/// for deadline in [30, 10, 20, 40] {
///     deadlines.push(deadline);
/// }
///
/// let mut expired = Vec::new();
/// deadlines.drain_while(&mut |deadline: &u64| {
///     if *deadline <= 25 {
///         expired.push(*deadline);
///         true
///     } else {
///         false
///     }
/// });
///
/// assert_eq!(expired, vec![10, 20]);
/// assert_eq!(deadlines.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct SortedQueue<T, C = Natural> {
    collection: OrderedCollection<T, C>,
}

impl<T, C: Comparator<T>> SortedQueue<T, C> {
    pub fn new(comparator: C) -> Self {
        Self {
            collection: OrderedCollection::sorted(comparator, false),
        }
    }

    pub fn peek(&self) -> Option<&T> {
        self.collection.first()
    }

    pub fn as_collection(&self) -> &OrderedCollection<T, C> {
        &self.collection
    }

    pub fn into_collection(self) -> OrderedCollection<T, C> {
        self.collection
    }
}

impl<T, C: Comparator<T>> Drainable<T> for SortedQueue<T, C> {
    fn reset(&mut self) {
        self.collection.reset();
    }

    fn push(&mut self, item: T) {
        self.collection.include(item);
    }

    fn pop(&mut self) -> Result<T> {
        self.collection.pop()
    }

    fn drain_while(&mut self, predicate: &mut dyn FnMut(&T) -> bool) {
        self.collection.drain_while(predicate);
    }

    fn len(&self) -> usize {
        self.collection.len()
    }
}

impl<T, C: Comparator<T>> Drainable<T> for OrderedCollection<T, C> {
    fn reset(&mut self) {
        OrderedCollection::reset(self);
    }

    fn push(&mut self, item: T) {
        self.include(item);
    }

    fn pop(&mut self) -> Result<T> {
        OrderedCollection::pop(self)
    }

    fn drain_while(&mut self, predicate: &mut dyn FnMut(&T) -> bool) {
        while let Some(item) = self.first() {
            if !predicate(item) {
                return;
            }
            self.skip_head(1);
        }
    }

    fn len(&self) -> usize {
        OrderedCollection::len(self)
    }
}
