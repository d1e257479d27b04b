// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Take operator that limits the sequence to its first n values.

use crate::Sequence;
use seqflow_core::{non_negative, Reduced, Result, StatefulSource};

impl<'a, T: 'a> Sequence<'a, T> {
    /// Forwards at most the first `count` values.
    ///
    /// Unlike [`skip`](Self::skip), `take` short-circuits the upstream walk: as
    /// soon as the limit is reached it cancels a token linked to the one it was
    /// given, so the upstream stops producing values. The caller's own token
    /// is left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::as_sequence;
    ///
    /// assert_eq!(as_sequence([1, 2, 3, 4, 5]).take(3).to_vec(), vec![1, 2, 3]);
    /// assert_eq!(as_sequence([1, 2, 3, 4, 5]).skip(1).take(2).to_vec(), vec![2, 3]);
    /// ```
    ///
    /// # See Also
    ///
    /// - [`Sequence::skip`] - Discard the first n values
    /// - [`Sequence::try_take`] - Signed variant that rejects negative counts
    #[must_use]
    pub fn take(self, count: usize) -> Self {
        let source = StatefulSource::<_, _, _, T>::new(
            self.into_source(),
            0usize,
            move |value: T, taken: usize| {
                if taken < count {
                    let taken = taken + 1;
                    Reduced::emit(value, taken).cancel_when(taken >= count)
                } else {
                    // Limit already reached: `take(0)`, or an upstream ignoring the token.
                    Reduced::suppress(taken).cancel_when(true)
                }
            },
        );
        Sequence::from_source(source)
    }

    /// Checked variant of [`take`](Self::take) for signed counts.
    ///
    /// # Errors
    /// Returns [`SequenceError::InvalidArgument`](seqflow_core::SequenceError::InvalidArgument)
    /// when `count` is negative. The check happens here, not at evaluation time.
    pub fn try_take(self, count: i64) -> Result<Self> {
        let count = non_negative("count", count)?;
        Ok(self.take(count))
    }
}
