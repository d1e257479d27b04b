// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{CancelToken, EmitterSource};
use std::fmt;
use std::marker::PhantomData;

/// Emitter over an ordered, finite, indexable collection.
///
/// The collection is held as-is (`Vec<T>`, `&[T]`, `Arc<[T]>`, `[T; N]`), never
/// copied; each pushed value is a clone of the stored element. Repeated
/// emissions push identical `(value, index)` pairs as long as the collection
/// is not mutated in between.
pub struct ArraySource<S, T> {
    items: S,
    _marker: PhantomData<fn() -> T>,
}

impl<S, T> ArraySource<S, T>
where
    S: AsRef<[T]>,
{
    pub const fn new(items: S) -> Self {
        Self {
            items,
            _marker: PhantomData,
        }
    }

    pub fn as_slice(&self) -> &[T] {
        self.items.as_ref()
    }

    pub fn into_inner(self) -> S {
        self.items
    }
}

impl<S, T> EmitterSource<T> for ArraySource<S, T>
where
    S: AsRef<[T]>,
    T: Clone,
{
    fn emit(&self, observer: &mut dyn FnMut(T, usize), cancel: &CancelToken) -> usize {
        let mut count = 0;
        for item in self.items.as_ref() {
            if cancel.is_signaled() {
                break;
            }
            observer(item.clone(), count);
            count += 1;
        }
        count
    }

    fn known_len(&self) -> Option<usize> {
        Some(self.items.as_ref().len())
    }
}

impl<S, T> fmt::Debug for ArraySource<S, T>
where
    S: AsRef<[T]>,
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArraySource")
            .field("items", &self.items.as_ref())
            .finish()
    }
}
