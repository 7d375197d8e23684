//! Core search and merge algorithms.
//!
//! Everything here works on a borrowed sequence plus a [`Comparator`] and never allocates
//! beyond the output it is handed:
//! - [`lower_bound`]: Binary search for the first position not ordered before an item.
//! - [`linear_search`]: First position comparing equal to an item.
//! - [`merge`]: Two-cursor union of ascending sequences, optionally collapsing ties.
//! - [`difference`]: Two-cursor difference of ascending sequences.

use crate::core::Comparator;
use std::cmp::Ordering;
use std::collections::VecDeque;

/// Returns the smallest index `i` such that `!less(items[i], item)`.
///
/// `items` must be ascending under `comparator`. Returns `items.len()` when every element
/// orders before `item`.
///
/// # Examples
///
/// ```
/// use std::collections::VecDeque;
/// use orderly::algo::lower_bound;
/// use orderly::core::Natural;
///
/// let items: VecDeque<i32> = VecDeque::from(vec![1, 3, 3, 5]);
/// assert_eq!(lower_bound(&items, &3, &Natural), 1);
/// assert_eq!(lower_bound(&items, &4, &Natural), 3);
/// assert_eq!(lower_bound(&items, &9, &Natural), 4);
/// ```
#[inline]
pub fn lower_bound<T, C>(items: &VecDeque<T>, item: &T, comparator: &C) -> usize
where
    C: Comparator<T> + ?Sized,
{
    items.partition_point(|probe| comparator.less(probe, item))
}

/// Returns the index of the first element equal to `item`, or `items.len()` if none is.
#[inline]
pub fn linear_search<T, C>(items: &VecDeque<T>, item: &T, comparator: &C) -> usize
where
    C: Comparator<T> + ?Sized,
{
    items
        .iter()
        .position(|probe| comparator.equal(probe, item))
        .unwrap_or(items.len())
}

/// Merges two ascending sequences into `out`.
///
/// At each step the smaller head is emitted. On a tie the left element is always emitted and
/// the right one follows it unless `dedup` is set; both cursors then advance. Whatever remains
/// of either side once the other runs dry is appended as-is.
///
/// # Examples
///
/// ```
/// use std::collections::VecDeque;
/// use orderly::algo::merge;
/// use orderly::core::Natural;
///
/// let mut out = VecDeque::new();
/// merge([1, 3, 5].iter(), [2, 3, 4].iter(), &Natural, true, &mut out);
/// assert_eq!(out, [1, 2, 3, 4, 5]);
/// ```
pub fn merge<'a, T, C, L, R>(left: L, right: R, comparator: &C, dedup: bool, out: &mut VecDeque<T>)
where
    T: Clone + 'a,
    C: Comparator<T> + ?Sized,
    L: IntoIterator<Item = &'a T>,
    R: IntoIterator<Item = &'a T>,
{
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(a), Some(b)) = (left.peek(), right.peek()) {
        match comparator.compare(a, b) {
            Ordering::Less => {
                out.push_back((*a).clone());
                left.next();
            }
            Ordering::Greater => {
                out.push_back((*b).clone());
                right.next();
            }
            Ordering::Equal => {
                out.push_back((*a).clone());
                if !dedup {
                    out.push_back((*b).clone());
                }
                left.next();
                right.next();
            }
        }
    }

    // At most one side still has elements.
    out.extend(left.cloned());
    out.extend(right.cloned());
}

/// Writes into `out` every element of `left` with no equal counterpart in `right`.
///
/// Both sides must be ascending. Each element of `right` cancels at most one equal element of
/// `left`. Survivors keep their original relative order.
///
/// # Examples
///
/// ```
/// use std::collections::VecDeque;
/// use orderly::algo::difference;
/// use orderly::core::Natural;
///
/// let mut out = VecDeque::new();
/// difference([1, 3, 5].iter(), [2, 3, 4].iter(), &Natural, &mut out);
/// assert_eq!(out, [1, 5]);
/// ```
pub fn difference<'a, T, C, L, R>(left: L, right: R, comparator: &C, out: &mut VecDeque<T>)
where
    T: Clone + 'a,
    C: Comparator<T> + ?Sized,
    L: IntoIterator<Item = &'a T>,
    R: IntoIterator<Item = &'a T>,
{
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(a), Some(b)) = (left.peek(), right.peek()) {
        match comparator.compare(a, b) {
            Ordering::Less => {
                out.push_back((*a).clone());
                left.next();
            }
            Ordering::Greater => {
                right.next();
            }
            Ordering::Equal => {
                left.next();
                right.next();
            }
        }
    }

    out.extend(left.cloned());
}
