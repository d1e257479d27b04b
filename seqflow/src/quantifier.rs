// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Quantifiers: all, any and contains. Each stops the walk as soon as the
//! answer is known.

use crate::Sequence;
use seqflow_core::CancelTokenSource;

impl<'a, T: 'a> Sequence<'a, T> {
    /// Returns whether every value satisfies `predicate`.
    ///
    /// Stops at the first failing value. Vacuously `true` for an empty
    /// sequence.
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        !self.any_where(|value| !predicate(value))
    }

    /// Returns whether the sequence has at least one value.
    ///
    /// Stops after the first value. `false` for an empty sequence.
    pub fn any(&self) -> bool {
        self.any_where(|_| true)
    }

    /// Returns whether some value satisfies `predicate`.
    ///
    /// Stops at the first match, so later values are never visited.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::as_sequence;
    ///
    /// assert!(as_sequence([0, 1, 2, 3]).any_where(|v| *v == 1));
    /// assert!(!as_sequence::<i32, _>([]).any());
    /// ```
    pub fn any_where<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        let stop = CancelTokenSource::new();
        let mut matched = false;
        self.emit(
            &mut |value, _| {
                if predicate(&value) {
                    matched = true;
                    stop.cancel();
                }
            },
            &stop.token(),
        );
        matched
    }

    /// Returns whether the sequence holds a value equal to `needle`.
    ///
    /// Equality is `PartialEq`: strict, type-checked comparison with no
    /// coercion between representations.
    pub fn contains(&self, needle: &T) -> bool
    where
        T: PartialEq,
    {
        self.any_where(|value| value == needle)
    }
}
