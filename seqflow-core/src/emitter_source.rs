// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::CancelToken;

/// A conceptual sequence that pushes its values to an observer.
///
/// Each call to [`emit`](EmitterSource::emit) is an independent traversal from
/// the start of the sequence. Implementations must:
///
/// - check `cancel` before every push, so a cancellation requested by the
///   observer during one push stops the walk before the next;
/// - pass a 0-based index counting only the values pushed by this source;
/// - return the number of values pushed.
///
/// Single-traversal sources such as [`IteratorSource`](crate::IteratorSource)
/// are the documented exception to the repeatability rule.
pub trait EmitterSource<T> {
    /// Push every value to `observer` until exhausted or `cancel` is signaled.
    fn emit(&self, observer: &mut dyn FnMut(T, usize), cancel: &CancelToken) -> usize;

    /// Number of values a full traversal would push, when known without
    /// walking the sequence.
    fn known_len(&self) -> Option<usize> {
        None
    }
}

impl<T, S> EmitterSource<T> for Box<S>
where
    S: EmitterSource<T> + ?Sized,
{
    fn emit(&self, observer: &mut dyn FnMut(T, usize), cancel: &CancelToken) -> usize {
        (**self).emit(observer, cancel)
    }

    fn known_len(&self) -> Option<usize> {
        (**self).known_len()
    }
}

impl<T, S> EmitterSource<T> for &S
where
    S: EmitterSource<T> + ?Sized,
{
    fn emit(&self, observer: &mut dyn FnMut(T, usize), cancel: &CancelToken) -> usize {
        (**self).emit(observer, cancel)
    }

    fn known_len(&self) -> Option<usize> {
        (**self).known_len()
    }
}
