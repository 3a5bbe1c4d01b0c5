//! Normalization Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.
//!
//! Only mistakes made by the *caller* end up here. Malformed or inconsistent
//! scraped content is absorbed by the engine and only ever shows up in the
//! shape of the output (dropped entries, synthesized orphan indices).

use derive_more::{Display, Error};

/// A normalization error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for normalization operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input stream contained more than one series metadata item.
    #[display("series metadata supplied more than once")]
    DuplicateMeta,
    /// Series metadata arrived after the first entry (at the given position).
    #[display("series metadata must come first, found at position {_0}")]
    MetaNotFirst(#[error(not(source))] usize),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // Contract violations are programming mistakes upstream; feeding
        // the same stream again fails the same way.
        false
    }
}
