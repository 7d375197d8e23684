//! # Orderly
//!
//! `orderly` provides an **ordered collection**: a sequence of values that can keep itself
//! sorted, and optionally free of duplicates, under a caller-supplied three-way
//! [`Comparator`]. It is a building block for priority queues, sorted indices and
//! deduplicating merge pipelines.
//!
//! ## Key Features
//!
//! - **Binary-search membership**: In sorted mode, lookup, insertion and removal locate their
//!   position with a lower-bound search over a ring buffer.
//! - **Linear-time set algebra**: [`OrderedCollection::add`] and [`OrderedCollection::sub`]
//!   combine two sorted collections with a two-cursor merge, allocating a fresh result.
//! - **Validated construction**: [`CollectionBuilder`] refuses sorted mode without a
//!   comparator.
//! - **Drainable queues**: [`Fifo`] and [`SortedQueue`] share the [`Drainable`] capability,
//!   so consumers can pop runs of items without caring which ordering backs them.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use orderly::prelude::*;
//!
//! let mut a = OrderedCollection::sorted(Natural, true);
//! for n in [1, 3, 2, 4, 3] {
//!     a.include(n);
//! }
//! assert_eq!(a.to_vec(), vec![1, 2, 3, 4]);
//!
//! let mut b = OrderedCollection::sorted(Natural, true);
//! b.push_multiple([2, 3, 5]);
//!
//! assert_eq!(a.add(&b, true)?.to_vec(), vec![1, 2, 3, 4, 5]);
//! assert_eq!(a.sub(&b)?.to_vec(), vec![1, 4]);
//! # Ok::<(), orderly::Error>(())
//! ```
//!
//! ### Custom Ordering
//!
//! Any `Fn(&T, &T) -> Ordering` is a comparator, and so is any type implementing
//! [`Comparator`].
//!
//! ```rust
//! use orderly::prelude::*;
//!
//! #[derive(Clone, Debug)]
//! struct Job {
//!     name: &'static str,
//!     priority: u8,
//! }
//!
//! let by_priority = |a: &Job, b: &Job| a.priority.cmp(&b.priority);
//! let mut jobs = CollectionBuilder::new()
//!     .with_comparator(by_priority)
//!     .with_sorted(true)
//!     .build::<Job>()?;
//!
//! jobs.include(Job { name: "index", priority: 2 });
//! jobs.include(Job { name: "flush", priority: 1 });
//!
//! assert_eq!(jobs.pop()?.name, "flush");
//! # Ok::<(), orderly::Error>(())
//! ```
//!
//! ## Modes
//!
//! Uniqueness is only enforced while sorted mode is on; see [`OrderedCollection`] for the
//! full behaviour table.
//!
//! ## Performance Characteristics
//!
//! - **Lookup**: O(log n) sorted, O(n) unsorted with a comparator.
//! - **Insertion/removal**: O(log n) to locate, O(n) worst case to shift.
//! - **`pop` / `skip_head`**: O(1) per removed element.
//! - **`add` / `sub`**: O(n + m).
//!
//! None of the types lock internally. Mutation from several threads needs an external
//! `Mutex`.

pub mod algo;
pub mod builder;
pub mod collection;
pub mod core;
pub mod drain;
pub mod error;
pub mod set;

pub use crate::builder::{CollectionBuilder, CollectionOptions};
pub use crate::collection::OrderedCollection;
pub use crate::core::{Comparator, Natural, Reverse};
pub use crate::drain::{Drainable, Fifo, SortedQueue};
pub use crate::error::{Error, Result};
pub use crate::set::HashedSet;

pub mod prelude {
    pub use crate::builder::{CollectionBuilder, CollectionOptions};
    pub use crate::collection::OrderedCollection;
    pub use crate::core::{Comparator, Natural, Reverse};
    pub use crate::drain::{Drainable, Fifo, SortedQueue};
    pub use crate::error::Error;
}
