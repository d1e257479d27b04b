// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Append operator that adds one value after the sequence.

use crate::Sequence;
use seqflow_core::EmitterSource;

impl<'a, T: 'a> Sequence<'a, T> {
    /// Emits the whole sequence, then `value` at index `parent_count`.
    ///
    /// The appended value is only pushed when the parent pass ran to
    /// exhaustion. If cancellation was requested during the parent pass the
    /// value is dropped and the reported count is the parent's alone.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::as_sequence;
    ///
    /// assert_eq!(as_sequence([1, 2, 3, 4]).append(5).to_vec(), vec![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn append(self, value: T) -> Self
    where
        T: Clone,
    {
        let source = self.into_source();
        Sequence::from_fn(move |observer, cancel| {
            let count = source.emit(observer, cancel);
            if cancel.is_signaled() {
                return count;
            }
            observer(value.clone(), count);
            count + 1
        })
    }
}
