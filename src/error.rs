//! Error type shared by collections, builders and drain adapters.

use thiserror::Error;

/// Failures reported by this crate.
///
/// "Not found" and "not inserted" are ordinary outcomes and are reported through `bool` and
/// `Option` results instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// Sorted mode was requested without a comparator. Fix the configuration and rebuild.
    #[error("required field 'comparator' is not set")]
    MissingComparator,
    /// Nothing left to pop.
    #[error("no match")]
    Empty,
    /// Set algebra was invoked on a collection that is not in sorted mode.
    #[error("set operation requires a sorted receiver")]
    NotSorted,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
