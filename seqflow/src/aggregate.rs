// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Aggregating materializers: fold, count, sum, average, min and max.
//!
//! All of these walk the whole sequence with an uncancellable token.
//! Only the generic fold buffers the values; the others keep a running total.

use crate::Sequence;
use seqflow_core::{CancelToken, Result, SequenceError};
use std::mem;
use std::ops::Add;

impl<'a, T: 'a> Sequence<'a, T> {
    /// Folds every value into an accumulator starting from `seed`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::as_sequence;
    ///
    /// let csv = as_sequence(["a", "b", "c"]).aggregate(String::new(), |mut acc, s| {
    ///     if !acc.is_empty() {
    ///         acc.push(',');
    ///     }
    ///     acc.push_str(s);
    ///     acc
    /// });
    /// assert_eq!(csv, "a,b,c");
    /// ```
    pub fn aggregate<A, F>(&self, seed: A, accumulator: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        self.aggregate_with(seed, accumulator, |acc| acc)
    }

    /// Folds every value, then maps the final accumulator through
    /// `result_selector`.
    ///
    /// The accumulator is moved into `accumulator` at every step, which a push
    /// callback cannot do with borrowed state, so the values are collected
    /// first and folded in order.
    pub fn aggregate_with<A, R, F, S>(&self, seed: A, accumulator: F, result_selector: S) -> R
    where
        F: FnMut(A, T) -> A,
        S: FnOnce(A) -> R,
    {
        result_selector(self.iter().fold(seed, accumulator))
    }

    /// Number of values in the sequence.
    ///
    /// Uses the source's known length when it has one instead of walking.
    pub fn count(&self) -> usize {
        match self.known_len() {
            Some(len) => len,
            None => self.emit(&mut |_, _| {}, &CancelToken::NEVER),
        }
    }

    /// Number of values satisfying `predicate`. Always walks the sequence.
    pub fn count_where<P>(&self, predicate: P) -> usize
    where
        P: Fn(&T) -> bool,
    {
        let mut count = 0;
        self.emit(
            &mut |value, _| {
                if predicate(&value) {
                    count += 1;
                }
            },
            &CancelToken::NEVER,
        );
        count
    }

    /// Sum of the values; `T::default()` for an empty sequence.
    pub fn sum(&self) -> T
    where
        T: Default + Add<Output = T>,
    {
        self.sum_by(|value| value)
    }

    /// Sum of `selector(value)` over the sequence.
    pub fn sum_by<N, F>(&self, selector: F) -> N
    where
        N: Default + Add<Output = N>,
        F: Fn(T) -> N,
    {
        let mut total = N::default();
        self.emit(
            &mut |value, _| {
                total = mem::take(&mut total) + selector(value);
            },
            &CancelToken::NEVER,
        );
        total
    }

    /// Arithmetic mean of the values.
    ///
    /// # Errors
    /// Returns [`SequenceError::EmptySequence`] when the sequence is empty.
    pub fn average(&self) -> Result<f64>
    where
        T: Into<f64>,
    {
        self.average_by(Into::into)
    }

    /// Arithmetic mean of `selector(value)` over the sequence.
    ///
    /// # Errors
    /// Returns [`SequenceError::EmptySequence`] when the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::as_sequence;
    ///
    /// let mean = as_sequence([10, 10, 15, 15, 10]).average_by(f64::from).unwrap();
    /// assert_eq!(mean, 12.0);
    /// ```
    pub fn average_by<F>(&self, selector: F) -> Result<f64>
    where
        F: Fn(T) -> f64,
    {
        let mut sum = 0.0;
        let mut count = 0usize;
        self.emit(
            &mut |value, _| {
                sum += selector(value);
                count += 1;
            },
            &CancelToken::NEVER,
        );
        if count == 0 {
            return Err(SequenceError::empty_sequence("average"));
        }
        Ok(sum / count as f64)
    }

    /// Smallest value. Ties keep the first occurrence.
    ///
    /// # Errors
    /// Returns [`SequenceError::EmptySequence`] when the sequence is empty.
    pub fn min(&self) -> Result<T>
    where
        T: PartialOrd,
    {
        self.best_by("min", |candidate, best| candidate < best)
    }

    /// Largest value. Ties keep the first occurrence.
    ///
    /// # Errors
    /// Returns [`SequenceError::EmptySequence`] when the sequence is empty.
    pub fn max(&self) -> Result<T>
    where
        T: PartialOrd,
    {
        self.best_by("max", |candidate, best| candidate > best)
    }

    /// Value with the smallest key. Ties keep the first occurrence.
    ///
    /// # Errors
    /// Returns [`SequenceError::EmptySequence`] when the sequence is empty.
    pub fn min_by_key<K, F>(&self, key_selector: F) -> Result<T>
    where
        K: PartialOrd,
        F: Fn(&T) -> K,
    {
        self.best_by("min_by_key", |candidate, best| {
            key_selector(candidate) < key_selector(best)
        })
    }

    /// Value with the largest key. Ties keep the first occurrence.
    ///
    /// # Errors
    /// Returns [`SequenceError::EmptySequence`] when the sequence is empty.
    pub fn max_by_key<K, F>(&self, key_selector: F) -> Result<T>
    where
        K: PartialOrd,
        F: Fn(&T) -> K,
    {
        self.best_by("max_by_key", |candidate, best| {
            key_selector(candidate) > key_selector(best)
        })
    }

    fn best_by<F>(&self, operation: &'static str, replaces: F) -> Result<T>
    where
        F: Fn(&T, &T) -> bool,
    {
        let mut best: Option<T> = None;
        self.emit(
            &mut |value, _| {
                best = Some(match best.take() {
                    Some(current) if !replaces(&value, &current) => current,
                    _ => value,
                });
            },
            &CancelToken::NEVER,
        );
        best.ok_or_else(|| SequenceError::empty_sequence(operation))
    }
}
