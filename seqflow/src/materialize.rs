// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Terminal materializers: vectors, sets, maps and plain iteration.

use crate::Sequence;
use seqflow_core::{CancelToken, CancelTokenSource, Result, SequenceError};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

impl<'a, T: 'a> Sequence<'a, T> {
    /// Evaluates the sequence into a vector.
    #[doc(alias = "to_array")]
    pub fn to_vec(&self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.known_len().unwrap_or_default());
        self.emit(&mut |value, _| items.push(value), &CancelToken::NEVER);
        items
    }

    /// Evaluates the sequence into a hash set.
    pub fn to_set(&self) -> HashSet<T>
    where
        T: Eq + Hash,
    {
        let mut items = HashSet::with_capacity(self.known_len().unwrap_or_default());
        self.emit(
            &mut |value, _| {
                items.insert(value);
            },
            &CancelToken::NEVER,
        );
        items
    }

    /// Evaluates the sequence into a map keyed by `key_selector`.
    ///
    /// # Errors
    /// Returns [`SequenceError::DuplicateKey`] as soon as two values project to
    /// an equal key; the evaluation stops there.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::as_sequence;
    ///
    /// let by_id = as_sequence([(1, "alice"), (2, "bob")]).to_map(|(id, _)| *id).unwrap();
    /// assert_eq!(by_id[&2], (2, "bob"));
    ///
    /// assert!(as_sequence([(1, "alice"), (1, "carmen")]).to_map(|(id, _)| *id).is_err());
    /// ```
    pub fn to_map<K, F>(&self, key_selector: F) -> Result<HashMap<K, T>>
    where
        K: Eq + Hash + Debug,
        F: Fn(&T) -> K,
    {
        self.to_map_with(key_selector, |value| value)
    }

    /// Like [`to_map`](Self::to_map), storing `value_selector(value)` instead
    /// of the value itself.
    ///
    /// # Errors
    /// Returns [`SequenceError::DuplicateKey`] on the first repeated key.
    pub fn to_map_with<K, V, FK, FV>(
        &self,
        key_selector: FK,
        value_selector: FV,
    ) -> Result<HashMap<K, V>>
    where
        K: Eq + Hash + Debug,
        FK: Fn(&T) -> K,
        FV: Fn(T) -> V,
    {
        let stop = CancelTokenSource::new();
        let mut map = HashMap::with_capacity(self.known_len().unwrap_or_default());
        let mut duplicate = None;

        self.emit(
            &mut |value, _| match map.entry(key_selector(&value)) {
                Entry::Occupied(entry) => {
                    if duplicate.is_none() {
                        duplicate = Some(SequenceError::duplicate_key(entry.key()));
                        stop.cancel();
                    }
                }
                Entry::Vacant(entry) => {
                    entry.insert(value_selector(value));
                }
            },
            &stop.token(),
        );

        match duplicate {
            Some(error) => Err(error),
            None => Ok(map),
        }
    }

    /// Calls `action` for every value.
    pub fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(T),
    {
        self.emit(&mut |value, _| action(value), &CancelToken::NEVER);
    }

    /// Calls `action` for every value together with its index.
    pub fn for_each_indexed<F>(&self, mut action: F)
    where
        F: FnMut(T, usize),
    {
        self.emit(&mut action, &CancelToken::NEVER);
    }

    /// Materializes the sequence and iterates the result.
    pub fn iter(&self) -> std::vec::IntoIter<T> {
        self.to_vec().into_iter()
    }
}

impl<'a, T: 'a> IntoIterator for Sequence<'a, T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_vec().into_iter()
    }
}

impl<'s, 'a, T: 'a> IntoIterator for &'s Sequence<'a, T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_vec().into_iter()
    }
}
