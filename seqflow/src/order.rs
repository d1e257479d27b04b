// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Ordering operators.
//!
//! Sorting needs every value, so these stages materialize the upstream on each
//! evaluation, sort it with the standard library's stable sort and emit the
//! sorted buffer as a fresh source. Building the sequence stays lazy.

use crate::Sequence;
use seqflow_core::{EmitterSource, IteratorSource};
use std::cmp::Ordering;

impl<'a, T: 'a> Sequence<'a, T> {
    /// Sorts values in ascending natural order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::as_sequence;
    ///
    /// assert_eq!(as_sequence([9, 2, 5, 8, 1]).order().to_vec(), vec![1, 2, 5, 8, 9]);
    /// ```
    #[must_use]
    pub fn order(self) -> Self
    where
        T: Ord,
    {
        self.order_with(T::cmp)
    }

    /// Sorts values with a caller-supplied comparator. The sort is stable.
    #[must_use]
    pub fn order_with<C>(self, compare: C) -> Self
    where
        C: Fn(&T, &T) -> Ordering + 'a,
    {
        let source = self.into_source();
        Sequence::from_fn(move |observer, cancel| {
            let mut items = Vec::with_capacity(source.known_len().unwrap_or_default());
            source.emit(&mut |value, _| items.push(value), cancel);
            items.sort_by(&compare);
            IteratorSource::new(items).emit(observer, cancel)
        })
    }

    /// Sorts values by ascending key. Values with equal keys keep their order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::as_sequence;
    ///
    /// let by_len = as_sequence(["kiwi", "fig", "banana"]).order_by(|s| s.len());
    /// assert_eq!(by_len.to_vec(), vec!["fig", "kiwi", "banana"]);
    /// ```
    #[must_use]
    pub fn order_by<K, F>(self, key_selector: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'a,
    {
        self.order_with(move |a, b| key_selector(a).cmp(&key_selector(b)))
    }

    /// Sorts values by descending key. Values with equal keys keep their order.
    #[must_use]
    pub fn order_by_descending<K, F>(self, key_selector: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'a,
    {
        self.order_with(move |a, b| key_selector(b).cmp(&key_selector(a)))
    }
}
