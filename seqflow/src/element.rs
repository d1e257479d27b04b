// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Element accessors: first, last and positional access.

use crate::Sequence;
use seqflow_core::{
    non_negative, CancelToken, CancelTokenSource, EmitterSource, Reduced, Result, SequenceError,
    StatefulSource,
};

impl<'a, T: 'a> Sequence<'a, T> {
    /// First value of the sequence.
    ///
    /// # Errors
    /// Returns [`SequenceError::EmptySequence`] when the sequence is empty.
    pub fn first(&self) -> Result<T> {
        self.first_or_none()
            .ok_or_else(|| SequenceError::empty_sequence("first"))
    }

    /// First value satisfying `predicate`. Stops the walk at the match.
    ///
    /// # Errors
    /// Returns [`SequenceError::EmptySequence`] when no value matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::as_sequence;
    ///
    /// assert_eq!(as_sequence([1, 2, 3, 4, 5]).first_where(|n| *n > 3), Ok(4));
    /// ```
    pub fn first_where<P>(&self, predicate: P) -> Result<T>
    where
        P: Fn(&T) -> bool,
    {
        self.first_where_or_none(predicate)
            .ok_or_else(|| SequenceError::empty_sequence("first"))
    }

    /// First value, or `None` for an empty sequence.
    pub fn first_or_none(&self) -> Option<T> {
        self.first_where_or_none(|_| true)
    }

    /// First value satisfying `predicate`, or `None`.
    ///
    /// Runs the source through a stateful stage that emits the match and
    /// cancels upstream in the same step, so nothing past the match is visited.
    pub fn first_where_or_none<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        // State is `true` once the match has been emitted; later values from a
        // source that ignores the token are suppressed.
        let finder = StatefulSource::<_, _, _, T>::new(self.source(), false, |value: T, found: bool| {
            if found {
                Reduced::suppress(true).cancel_when(true)
            } else if predicate(&value) {
                Reduced::emit(value, true).cancel_when(true)
            } else {
                Reduced::suppress(false)
            }
        });

        let mut found = None;
        finder.emit(&mut |value, _| found = Some(value), &CancelToken::NEVER);
        found
    }

    /// Last value of the sequence.
    ///
    /// # Errors
    /// Returns [`SequenceError::EmptySequence`] when the sequence is empty.
    pub fn last(&self) -> Result<T> {
        self.last_or_none()
            .ok_or_else(|| SequenceError::empty_sequence("last"))
    }

    /// Last value satisfying `predicate`. Always walks the whole sequence.
    ///
    /// # Errors
    /// Returns [`SequenceError::EmptySequence`] when no value matches.
    pub fn last_where<P>(&self, predicate: P) -> Result<T>
    where
        P: Fn(&T) -> bool,
    {
        self.last_where_or_none(predicate)
            .ok_or_else(|| SequenceError::empty_sequence("last"))
    }

    /// Last value, or `None` for an empty sequence.
    pub fn last_or_none(&self) -> Option<T> {
        self.last_where_or_none(|_| true)
    }

    /// Last value satisfying `predicate`, or `None`.
    pub fn last_where_or_none<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        let mut last = None;
        self.emit(
            &mut |value, _| {
                if predicate(&value) {
                    last = Some(value);
                }
            },
            &CancelToken::NEVER,
        );
        last
    }

    /// Value at position `index`. Stops the walk once the index is reached.
    ///
    /// # Errors
    /// Returns [`SequenceError::IndexOutOfRange`] when the sequence has
    /// `index` or fewer values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::as_sequence;
    ///
    /// assert_eq!(as_sequence([1, 2, 3, 4, 5]).element_at(2), Ok(3));
    /// assert!(as_sequence([1, 2]).element_at(2).is_err());
    /// ```
    pub fn element_at(&self, index: usize) -> Result<T> {
        let (found, count) = self.walk_to(index);
        found.ok_or_else(|| SequenceError::index_out_of_range(index, count))
    }

    /// Value at position `index`, or `None` when the sequence is too short.
    pub fn element_at_or_none(&self, index: usize) -> Option<T> {
        self.walk_to(index).0
    }

    /// Checked variant of [`element_at`](Self::element_at) for signed indexes.
    ///
    /// # Errors
    /// Returns [`SequenceError::InvalidArgument`] for a negative index, before
    /// any evaluation, and otherwise behaves like `element_at`.
    pub fn try_element_at(&self, index: i64) -> Result<T> {
        self.element_at(non_negative("index", index)?)
    }

    /// Checked variant of [`element_at_or_none`](Self::element_at_or_none).
    ///
    /// # Errors
    /// Returns [`SequenceError::InvalidArgument`] for a negative index.
    pub fn try_element_at_or_none(&self, index: i64) -> Result<Option<T>> {
        Ok(self.element_at_or_none(non_negative("index", index)?))
    }

    fn walk_to(&self, target: usize) -> (Option<T>, usize) {
        let stop = CancelTokenSource::new();
        let mut found = None;
        let count = self.emit(
            &mut |value, index| {
                if index == target {
                    found = Some(value);
                    stop.cancel();
                }
            },
            &stop.token(),
        );
        (found, count)
    }
}
