// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Skip operator that discards the first n values.

use crate::Sequence;
use seqflow_core::{non_negative, Reduced, Result, StatefulSource};

impl<'a, T: 'a> Sequence<'a, T> {
    /// Discards the first `count` values and forwards the rest.
    ///
    /// The upstream is still walked from the start: skipped values are
    /// visited, only their emission is suppressed. Indexes restart at 0 with
    /// the first forwarded value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::as_sequence;
    ///
    /// assert_eq!(as_sequence([1, 2, 3, 4, 5]).skip(3).to_vec(), vec![4, 5]);
    /// ```
    ///
    /// # See Also
    ///
    /// - [`Sequence::take`] - Keep only the first n values
    /// - [`Sequence::try_skip`] - Signed variant that rejects negative counts
    #[must_use]
    pub fn skip(self, count: usize) -> Self {
        let source = StatefulSource::<_, _, _, T>::new(
            self.into_source(),
            0usize,
            move |value: T, visited: usize| {
                let next = visited.saturating_add(1);
                if visited < count {
                    Reduced::suppress(next)
                } else {
                    Reduced::emit(value, next)
                }
            },
        );
        Sequence::from_source(source)
    }

    /// Checked variant of [`skip`](Self::skip) for signed counts.
    ///
    /// # Errors
    /// Returns [`SequenceError::InvalidArgument`](seqflow_core::SequenceError::InvalidArgument)
    /// when `count` is negative. The check happens here, not at evaluation time.
    pub fn try_skip(self, count: i64) -> Result<Self> {
        let count = non_negative("count", count)?;
        Ok(self.skip(count))
    }
}
