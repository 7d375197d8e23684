//! Core traits and types for orderly.
//!
//! This module defines:
//! - [`Comparator`]: The trait users implement to order their element type.
//! - [`Natural`] and [`Reverse`]: Ready-made comparators.

use std::cmp::Ordering;

/// A three-way comparison over `T`.
///
/// Only [`compare`](Comparator::compare) is required. [`less`](Comparator::less),
/// [`equal`](Comparator::equal) and [`greater`](Comparator::greater) are derived from it, so
/// the three agree with each other unless an implementor overrides them.
///
/// # Preconditions
///
/// The ordering must be a strict weak order: if `less(a, b)` then not `less(b, a)`, and
/// `equal(a, b)` holds exactly when neither `less(a, b)` nor `less(b, a)` does. This is not
/// checked. A comparator that breaks it leaves sorted collections in an unspecified (but
/// memory-safe) order.
///
/// # Examples
///
/// Implementing for a custom struct:
///
/// ```
/// use std::cmp::Ordering;
/// use orderly::core::Comparator;
///
/// struct Task {
///     priority: u8,
/// }
///
/// struct ByPriority;
///
/// impl Comparator<Task> for ByPriority {
///     fn compare(&self, a: &Task, b: &Task) -> Ordering {
///         a.priority.cmp(&b.priority)
///     }
/// }
///
/// assert!(ByPriority.less(&Task { priority: 1 }, &Task { priority: 2 }));
/// ```
///
/// Any closure with the right signature also works:
///
/// ```
/// use orderly::core::Comparator;
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// assert!(by_len.equal(&"abc", &"xyz"));
/// ```
pub trait Comparator<T: ?Sized> {
    /// Returns the ordering of `a` relative to `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns `true` if `a` orders strictly before `b`.
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Returns `true` if neither element orders before the other.
    #[inline]
    fn equal(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Equal
    }

    /// Returns `true` if `a` orders strictly after `b`.
    #[inline]
    fn greater(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Greater
    }
}

/// Orders elements by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Inverts the wrapped comparator.
///
/// ```
/// use orderly::core::{Comparator, Natural, Reverse};
///
/// assert!(Reverse(Natural).less(&9, &1));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reverse<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reverse<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

// Blanket implementation for comparison closures and function pointers.
impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
