// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Except operators: set difference against another sequence.

use crate::logging::debug;
use crate::Sequence;
use seqflow_core::EmitterSource;
use std::hash::Hash;

impl<'a, T: 'a> Sequence<'a, T> {
    /// Forwards the values that do not occur in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::as_sequence;
    ///
    /// let rest = as_sequence([1, 2, 3, 4, 5]).except(as_sequence([2, 4]));
    /// assert_eq!(rest.to_vec(), vec![1, 3, 5]);
    /// ```
    #[must_use]
    pub fn except(self, other: Sequence<'a, T>) -> Self
    where
        T: Eq + Hash + Clone,
    {
        self.except_by(other, T::clone)
    }

    /// Forwards the values whose key does not occur among the keys of `other`.
    ///
    /// On every evaluation `other` is first walked to completion, on its own
    /// and with an uncancellable token, to build the key set. Only then is
    /// this sequence emitted. The pre-pass is scoped to `other` alone.
    #[must_use]
    pub fn except_by<K, F>(self, other: Sequence<'a, T>, key_selector: F) -> Self
    where
        K: Eq + Hash + 'a,
        F: Fn(&T) -> K + 'a,
    {
        let source = self.into_source();
        Sequence::from_fn(move |observer, cancel| {
            let excluded = other.collect_keys(&key_selector);
            debug!("seqflow: except pre-pass collected {} keys", excluded.len());

            let mut index = 0;
            source.emit(
                &mut |value, _| {
                    if !excluded.contains(&key_selector(&value)) {
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
