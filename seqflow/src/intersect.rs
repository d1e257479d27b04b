// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Intersect operators: set intersection with another sequence.

use crate::logging::debug;
use crate::Sequence;
use seqflow_core::EmitterSource;
use std::hash::Hash;

impl<'a, T: 'a> Sequence<'a, T> {
    /// Forwards the values that also occur in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::as_sequence;
    ///
    /// let shared = as_sequence([1, 2, 3, 4, 5]).intersect(as_sequence([4, 2, 9]));
    /// assert_eq!(shared.to_vec(), vec![2, 4]);
    /// ```
    #[must_use]
    pub fn intersect(self, other: Sequence<'a, T>) -> Self
    where
        T: Eq + Hash + Clone,
    {
        self.intersect_by(other, T::clone)
    }

    /// Forwards the values whose key occurs among the keys of `other`.
    ///
    /// Same pre-pass as [`except_by`](Self::except_by), inverted membership test.
    #[must_use]
    pub fn intersect_by<K, F>(self, other: Sequence<'a, T>, key_selector: F) -> Self
    where
        K: Eq + Hash + 'a,
        F: Fn(&T) -> K + 'a,
    {
        let source = self.into_source();
        Sequence::from_fn(move |observer, cancel| {
            let included = other.collect_keys(&key_selector);
            debug!("seqflow: intersect pre-pass collected {} keys", included.len());

            let mut index = 0;
            source.emit(
                &mut |value, _| {
                    if included.contains(&key_selector(&value)) {
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
