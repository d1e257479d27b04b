// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Chunk operator that groups consecutive values into fixed-size vectors.

use crate::Sequence;
use seqflow_core::{EmitterSource, Result, SequenceError};
use std::mem;

impl<'a, T: 'a> Sequence<'a, T> {
    /// Groups consecutive values into vectors of `size` elements.
    ///
    /// The last chunk holds the remainder and may be shorter. It is only
    /// pushed when the upstream ran to exhaustion.
    ///
    /// # Errors
    /// Returns [`SequenceError::InvalidArgument`] when `size` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::as_sequence;
    ///
    /// let pairs = as_sequence([1, 2, 3, 4, 5]).chunk(2).unwrap();
    /// assert_eq!(pairs.to_vec(), vec![vec![1, 2], vec![3, 4], vec![5]]);
    /// ```
    pub fn chunk(self, size: usize) -> Result<Sequence<'a, Vec<T>>> {
        if size == 0 {
            return Err(SequenceError::invalid_argument("size", "must be > 0"));
        }

        let source = self.into_source();
        Ok(Sequence::from_fn(move |observer, cancel| {
            let mut buffer = Vec::with_capacity(size);
            let mut index = 0;
            source.emit(
                &mut |value, _| {
                    buffer.push(value);
                    if buffer.len() == size {
                        observer(mem::replace(&mut buffer, Vec::with_capacity(size)), index);
                        index += 1;
                    }
                },
                cancel,
            );

            if !buffer.is_empty() && !cancel.is_signaled() {
                observer(buffer, index);
                index += 1;
            }
            index
        }))
    }
}
