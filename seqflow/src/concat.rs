// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Concat operator that chains two sequences.

use crate::Sequence;
use seqflow_core::EmitterSource;

impl<'a, T: 'a> Sequence<'a, T> {
    /// Emits this sequence, then `other`, with one contiguous index.
    ///
    /// The same cancellation token is handed to both operands, so a stop
    /// requested while this sequence is emitting also keeps `other` from
    /// pushing anything.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::as_sequence;
    ///
    /// let all = as_sequence([1, 2, 3]).concat(as_sequence([4, 5, 6]));
    /// assert_eq!(all.to_vec(), vec![1, 2, 3, 4, 5, 6]);
    /// ```
    #[must_use]
    pub fn concat(self, other: Sequence<'a, T>) -> Self {
        let first = self.into_source();
        let second = other.into_source();
        Sequence::from_fn(move |observer, cancel| {
            let offset = first.emit(observer, cancel);
            offset + second.emit(&mut |value, index| observer(value, offset + index), cancel)
        })
    }
}
