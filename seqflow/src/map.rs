// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Map operator that transforms every value one-to-one.

use crate::Sequence;
use seqflow_core::EmitterSource;

impl<'a, T: 'a> Sequence<'a, T> {
    /// Applies `selector` to every value.
    ///
    /// The index passed downstream is this stage's own forwarded count, which
    /// for a 1:1 transform matches the upstream position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::as_sequence;
    ///
    /// let lengths = as_sequence(["apple", "fig"]).map(str::len);
    /// assert_eq!(lengths.to_vec(), vec![5, 3]);
    /// ```
    #[doc(alias = "select")]
    #[must_use]
    pub fn map<R, F>(self, selector: F) -> Sequence<'a, R>
    where
        R: 'a,
        F: Fn(T) -> R + 'a,
    {
        let source = self.into_source();
        Sequence::from_fn(move |observer, cancel| {
            let mut index = 0;
            source.emit(
                &mut |value, _| {
                    observer(selector(value), index);
                    index += 1;
                },
                cancel,
            );
            index
        })
    }
}
