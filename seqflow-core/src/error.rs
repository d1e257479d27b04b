// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for seqflow evaluations.
//!
//! Every variant describes a usage error detected synchronously at the point of
//! violation. Cancellation is not an error: a cancelled evaluation reports how
//! many values were pushed before the signal was observed.
//!
//! # Examples
//!
//! ```
//! use seqflow_core::{Result, SequenceError};
//!
//! fn first_even(values: &[i32]) -> Result<i32> {
//!     values
//!         .iter()
//!         .copied()
//!         .find(|v| v % 2 == 0)
//!         .ok_or_else(|| SequenceError::empty_sequence("first"))
//! }
//!
//! assert!(first_even(&[1, 3]).is_err());
//! ```

use std::fmt::Debug;

/// Root error type for all seqflow operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// A non-Or-None accessor found no matching element.
    #[error("Sequence contains no elements: {operation}")]
    EmptySequence {
        /// The accessor that required an element
        operation: &'static str,
    },

    /// An argument is outside the accepted domain (negative count or index,
    /// zero chunk size).
    #[error("Invalid argument `{name}`: {message}")]
    InvalidArgument {
        /// Name of the offending parameter
        name: &'static str,
        /// What was wrong with it
        message: String,
    },

    /// Two elements projected to an equal key while building a map.
    #[error("Duplicate key: {key}")]
    DuplicateKey {
        /// `Debug` rendering of the key
        key: String,
    },

    /// An index-based accessor ran past the end of the sequence.
    #[error("Index {index} is out of range for a sequence of {count} elements")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of elements actually produced
        count: usize,
    },
}

impl SequenceError {
    /// Create an empty-sequence error for the named accessor
    #[must_use]
    pub const fn empty_sequence(operation: &'static str) -> Self {
        Self::EmptySequence { operation }
    }

    /// Create an invalid-argument error
    pub fn invalid_argument(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            message: message.into(),
        }
    }

    /// Create a duplicate-key error from the offending key
    pub fn duplicate_key<K: Debug + ?Sized>(key: &K) -> Self {
        Self::DuplicateKey {
            key: format!("{key:?}"),
        }
    }

    /// Create an index-out-of-range error
    #[must_use]
    pub const fn index_out_of_range(index: usize, count: usize) -> Self {
        Self::IndexOutOfRange { index, count }
    }

    /// Seqflow performs no I/O, so nothing is worth retrying.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        false
    }

    /// Every variant reports a programmer or usage error.
    #[must_use]
    pub const fn is_usage_error(&self) -> bool {
        true
    }
}

/// Specialized Result type for seqflow operations.
pub type Result<T> = std::result::Result<T, SequenceError>;

/// Validates a signed count and converts it to `usize`.
///
/// # Errors
/// Returns [`SequenceError::InvalidArgument`] when `value` is negative.
pub fn non_negative(name: &'static str, value: i64) -> Result<usize> {
    if value < 0 {
        return Err(SequenceError::invalid_argument(
            name,
            format!("must be >= 0, got {value}"),
        ));
    }
    Ok(usize::try_from(value).unwrap_or(usize::MAX))
}
