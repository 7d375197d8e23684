//! Validated construction of [`OrderedCollection`]s.

use crate::collection::OrderedCollection;
use crate::error::{Error, Result};
use tracing::warn;

/// Mode flags for a collection.
///
/// Both default to `false`. With the `serde` feature enabled this can be read from
/// application configuration; the comparator always has to be supplied in code.
///
/// ```
/// use orderly::builder::CollectionOptions;
///
/// let options = CollectionOptions::default();
/// assert!(!options.sorted && !options.unique);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CollectionOptions {
    pub sorted: bool,
    pub unique: bool,
}

/// Assembles an [`OrderedCollection`] and rejects configurations that cannot work.
///
/// The only invalid combination is `sorted = true` without a comparator.
///
/// # Examples
///
/// ```
/// use orderly::prelude::*;
///
/// let collection = CollectionBuilder::new()
///     .with_comparator(Natural)
///     .with_sorted(true)
///     .with_unique(true)
///     .build::<u32>()
///     .unwrap();
/// assert!(collection.is_sorted());
///
/// let missing = CollectionBuilder::<Natural>::new().with_sorted(true).build::<u32>();
/// assert_eq!(missing.unwrap_err(), Error::MissingComparator);
/// ```
#[derive(Clone, Debug)]
pub struct CollectionBuilder<C> {
    comparator: Option<C>,
    options: CollectionOptions,
}

impl<C> CollectionBuilder<C> {
    pub fn new() -> Self {
        Self {
            comparator: None,
            options: CollectionOptions::default(),
        }
    }

    pub fn with_comparator(mut self, comparator: C) -> Self {
        self.comparator = Some(comparator);
        self
    }

    pub fn with_unique(mut self, unique: bool) -> Self {
        self.options.unique = unique;
        self
    }

    pub fn with_sorted(mut self, sorted: bool) -> Self {
        self.options.sorted = sorted;
        self
    }

    /// Replaces both mode flags at once.
    pub fn with_options(mut self, options: CollectionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> CollectionOptions {
        self.options
    }

    /// Validates the configuration and produces an empty collection.
    ///
    /// # Errors
    ///
    /// [`Error::MissingComparator`] if sorted mode was requested without a comparator.
    pub fn build<T>(self) -> Result<OrderedCollection<T, C>> {
        self.check_required_fields()?;

        let CollectionOptions { sorted, unique } = self.options;
        Ok(OrderedCollection::from_parts(
            self.comparator,
            sorted,
            unique,
        ))
    }

    fn check_required_fields(&self) -> Result<()> {
        if self.options.sorted && self.comparator.is_none() {
            warn!("sorted collection requested without a comparator");
            return Err(Error::MissingComparator);
        }
        Ok(())
    }
}

impl<C> Default for CollectionBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}
