// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqflow_core::{
    ArraySource, CancelToken, EmitterSource, EmptySource, FnSource, IteratorSource,
};
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// A lazy, composable query over an emitter source.
///
/// `Sequence` owns exactly one [`EmitterSource`]. Every operator consumes the
/// sequence and returns a new one whose source wraps the old one, so building a
/// pipeline evaluates nothing. Work happens only when a terminal consumer
/// ([`to_vec`](Sequence::to_vec), [`for_each`](Sequence::for_each),
/// [`aggregate`](Sequence::aggregate), [`emit`](Sequence::emit), ...) drives an
/// emission.
///
/// Terminal consumers take `&self`: a sequence built over a repeatable source
/// can be evaluated any number of times, each evaluation starting from scratch.
/// Sequences built with [`Sequence::from_iterator`] are single traversal.
///
/// The lifetime `'a` bounds whatever the pipeline borrows: a slice passed to
/// [`Sequence::from_slice`], or closures capturing local state.
///
/// # Example
///
/// ```
/// use seqflow::as_sequence;
///
/// let tens = as_sequence([1, 2, 3, 4, 5])
///     .filter(|n| n % 2 == 0)
///     .map(|n| n * 10);
///
/// assert_eq!(tens.to_vec(), vec![20, 40]);
/// // Evaluating again walks the source again
/// assert_eq!(tens.count(), 2);
/// ```
pub struct Sequence<'a, T> {
    source: Box<dyn EmitterSource<T> + 'a>,
}

impl<'a, T: 'a> Sequence<'a, T> {
    /// Wrap any emitter source.
    pub fn from_source<S>(source: S) -> Self
    where
        S: EmitterSource<T> + 'a,
    {
        Self {
            source: Box::new(source),
        }
    }

    /// A sequence with no values.
    pub fn empty() -> Self {
        Self::from_source(EmptySource)
    }

    /// Repeatable sequence over an owned vector.
    pub fn from_vec(items: Vec<T>) -> Self
    where
        T: Clone,
    {
        Self::from_source(ArraySource::new(items))
    }

    /// Repeatable sequence over a borrowed slice. The slice is not copied.
    pub fn from_slice(items: &'a [T]) -> Self
    where
        T: Clone,
    {
        Self::from_source(ArraySource::new(items))
    }

    /// Repeatable sequence over a shared slice. The slice is not copied.
    pub fn from_arc(items: Arc<[T]>) -> Self
    where
        T: Clone,
    {
        Self::from_source(ArraySource::new(items))
    }

    /// Single-traversal sequence over a one-shot iterator.
    ///
    /// Each evaluation resumes pulling where the previous one stopped; once the
    /// iterator is drained later evaluations push nothing. Collect into a
    /// `Vec` first (or use [`FromIterator`]) when the sequence must be
    /// evaluated more than once.
    pub fn from_iterator<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Self::from_source(IteratorSource::new(iter))
    }

    /// Sequence backed by a push function.
    ///
    /// `emit` receives the observer and the cancellation token and returns the
    /// number of values it pushed. It must check the token before every push.
    pub fn from_fn<F>(emit: F) -> Self
    where
        F: Fn(&mut dyn FnMut(T, usize), &CancelToken) -> usize + 'a,
    {
        Self::from_source(FnSource::new(emit))
    }

    /// Push every value to `observer` until the sequence is exhausted or
    /// `cancel` is signaled. Returns the number of values pushed.
    ///
    /// Indexes passed to the observer are 0-based and count only the values
    /// this sequence pushed.
    pub fn emit(&self, observer: &mut dyn FnMut(T, usize), cancel: &CancelToken) -> usize {
        self.source.emit(observer, cancel)
    }

    /// Length of a full traversal when the source knows it without walking.
    pub fn known_len(&self) -> Option<usize> {
        self.source.known_len()
    }

    pub(crate) fn into_source(self) -> Box<dyn EmitterSource<T> + 'a> {
        self.source
    }

    pub(crate) fn source(&self) -> &(dyn EmitterSource<T> + 'a) {
        &*self.source
    }

    /// Runs a full, uncancellable evaluation and collects the projected keys.
    pub(crate) fn collect_keys<K, F>(&self, key_selector: F) -> HashSet<K>
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        let mut keys = HashSet::with_capacity(self.known_len().unwrap_or_default());
        self.emit(
            &mut |value, _| {
                keys.insert(key_selector(&value));
            },
            &CancelToken::NEVER,
        );
        keys
    }
}

impl<'a, T: 'a> EmitterSource<T> for Sequence<'a, T> {
    fn emit(&self, observer: &mut dyn FnMut(T, usize), cancel: &CancelToken) -> usize {
        self.source.emit(observer, cancel)
    }

    fn known_len(&self) -> Option<usize> {
        self.source.known_len()
    }
}

impl<'a, T: 'a> Default for Sequence<'a, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, T: Clone + 'a> From<Vec<T>> for Sequence<'a, T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<'a, T: Clone + 'a> FromIterator<T> for Sequence<'a, T> {
    /// Collects the iterator into a repeatable sequence.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T> fmt::Debug for Sequence<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("known_len", &self.source.known_len())
            .finish_non_exhaustive()
    }
}
