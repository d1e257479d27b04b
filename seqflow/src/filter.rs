// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Filter operator that forwards only values satisfying a predicate.

use crate::Sequence;
use seqflow_core::EmitterSource;

impl<'a, T: 'a> Sequence<'a, T> {
    /// Forwards only the values for which `predicate` returns `true`.
    ///
    /// Indexes are renumbered from 0 over the forwarded values only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::as_sequence;
    ///
    /// let evens = as_sequence(vec![1, 2, 3, 4, 5, 6]).filter(|n| n % 2 == 0);
    /// assert_eq!(evens.to_vec(), vec![2, 4, 6]);
    /// ```
    ///
    /// # See Also
    ///
    /// - [`Sequence::map`] - Transform every value
    /// - [`Sequence::distinct`] - Drop repeated values
    #[doc(alias = "where")]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'a,
    {
        let source = self.into_source();
        Sequence::from_fn(move |observer, cancel| {
            let mut index = 0;
            source.emit(
                &mut |value, _| {
                    if predicate(&value) {
                        observer(value, index);
                        index += 1;
                    }
                },
                cancel,
            );
            index
        })
    }
}
