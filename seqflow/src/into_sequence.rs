// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Conversions from in-memory collections into repeatable sequences.

use crate::Sequence;

/// Extension trait to turn finite collections into a [`Sequence`].
///
/// All implementations produce an array-backed, repeatable sequence without
/// copying the collection.
///
/// # Example
///
/// ```rust
/// use seqflow::IntoSequence;
///
/// let names = vec!["alice", "bob"];
/// let upper = names.as_slice().into_sequence().map(str::to_uppercase);
/// assert_eq!(upper.to_vec(), vec!["ALICE", "BOB"]);
/// ```
pub trait IntoSequence<'a, T> {
    /// Converts this collection into a sequence.
    fn into_sequence(self) -> Sequence<'a, T>;
}

impl<'a, T: Clone + 'a> IntoSequence<'a, T> for Vec<T> {
    fn into_sequence(self) -> Sequence<'a, T> {
        Sequence::from_vec(self)
    }
}

impl<'a, T: Clone + 'a> IntoSequence<'a, T> for &'a [T] {
    fn into_sequence(self) -> Sequence<'a, T> {
        Sequence::from_slice(self)
    }
}

impl<'a, T: Clone + 'a> IntoSequence<'a, T> for &'a Vec<T> {
    fn into_sequence(self) -> Sequence<'a, T> {
        Sequence::from_slice(self.as_slice())
    }
}

impl<'a, T: Clone + 'a, const N: usize> IntoSequence<'a, T> for [T; N] {
    fn into_sequence(self) -> Sequence<'a, T> {
        Sequence::from_source(seqflow_core::ArraySource::new(self))
    }
}

/// Builds a repeatable sequence from any supported collection.
///
/// ```rust
/// use seqflow::as_sequence;
///
/// let distinct = as_sequence([1, 2, 2, 3, 4, 4, 4, 5]).distinct();
/// assert_eq!(distinct.to_vec(), vec![1, 2, 3, 4, 5]);
/// ```
pub fn as_sequence<'a, T, C>(items: C) -> Sequence<'a, T>
where
    C: IntoSequence<'a, T>,
{
    items.into_sequence()
}
