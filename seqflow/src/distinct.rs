// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Distinct operators that drop values whose key was already seen.

use crate::Sequence;
use seqflow_core::{Reduced, StatefulSource};
use std::collections::HashSet;
use std::hash::Hash;

impl<'a, T: 'a> Sequence<'a, T> {
    /// Forwards each value the first time it is seen.
    ///
    /// Order of first occurrence is preserved. Equivalent to
    /// `distinct_by(|v| v.clone())`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::as_sequence;
    ///
    /// let unique = as_sequence([1, 2, 2, 3, 4, 4, 4, 5]).distinct();
    /// assert_eq!(unique.to_vec(), vec![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn distinct(self) -> Self
    where
        T: Eq + Hash + Clone,
    {
        self.distinct_by(T::clone)
    }

    /// Forwards each value whose projected key has not been seen before.
    ///
    /// The set of seen keys lives only for the duration of one emission, so
    /// evaluating the sequence twice yields the same output twice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::as_sequence;
    ///
    /// let by_len = as_sequence(["ant", "bee", "wasp", "moth", "hornet"]).distinct_by(|s| s.len());
    /// assert_eq!(by_len.to_vec(), vec!["ant", "wasp", "hornet"]);
    /// ```
    #[must_use]
    pub fn distinct_by<K, F>(self, key_selector: F) -> Self
    where
        K: Eq + Hash + Clone + 'a,
        F: Fn(&T) -> K + 'a,
    {
        let source = StatefulSource::<_, _, _, T>::new(
            self.into_source(),
            HashSet::new(),
            move |value: T, mut seen: HashSet<K>| {
                if seen.insert(key_selector(&value)) {
                    Reduced::emit(value, seen)
                } else {
                    Reduced::suppress(seen)
                }
            },
        );
        Sequence::from_source(source)
    }
}
