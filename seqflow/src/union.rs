// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Union operators: first-seen values across two sequences.

use crate::Sequence;
use seqflow_core::EmitterSource;
use std::collections::HashSet;
use std::hash::Hash;

impl<'a, T: 'a> Sequence<'a, T> {
    /// Emits every distinct value of this sequence, then every value of
    /// `other` not seen so far.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::as_sequence;
    ///
    /// let all = as_sequence([1, 2, 2, 3]).union(as_sequence([3, 4, 1, 5]));
    /// assert_eq!(all.to_vec(), vec![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn union(self, other: Sequence<'a, T>) -> Self
    where
        T: Eq + Hash + Clone,
    {
        self.union_by(other, T::clone)
    }

    /// Union keyed by `key_selector`.
    ///
    /// A single key set grows while walking this sequence and then `other`;
    /// each operand contributes only first-seen keys and the index runs
    /// continuously across both. No pre-pass: values stream straight through.
    #[must_use]
    pub fn union_by<K, F>(self, other: Sequence<'a, T>, key_selector: F) -> Self
    where
        K: Eq + Hash + 'a,
        F: Fn(&T) -> K + 'a,
    {
        let first = self.into_source();
        let second = other.into_source();
        Sequence::from_fn(move |observer, cancel| {
            let mut seen = HashSet::new();
            let mut index = 0;
            let mut forward = |value: T| {
                if seen.insert(key_selector(&value)) {
                    observer(value, index);
                    index += 1;
                }
            };

            first.emit(&mut |value, _| forward(value), cancel);
            second.emit(&mut |value, _| forward(value), cancel);
            index
        })
    }
}
