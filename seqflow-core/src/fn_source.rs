// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{CancelToken, EmitterSource};
use std::fmt;

/// Emitter that delegates to a push function.
///
/// Every derived operator builds its source this way: the closure captures the
/// upstream source by value and implements the operator's `emit` in terms of it.
///
/// ```
/// use seqflow_core::{CancelToken, EmitterSource, FnSource};
///
/// let countdown = FnSource::new(|observer: &mut dyn FnMut(u32, usize), cancel: &CancelToken| {
///     let mut count = 0;
///     for value in (1..=3).rev() {
///         if cancel.is_signaled() {
///             break;
///         }
///         observer(value, count);
///         count += 1;
///     }
///     count
/// });
///
/// let mut seen = Vec::new();
/// assert_eq!(countdown.emit(&mut |v, _| seen.push(v), &CancelToken::NEVER), 3);
/// assert_eq!(seen, vec![3, 2, 1]);
/// ```
pub struct FnSource<F> {
    emit: F,
}

impl<F> FnSource<F> {
    pub const fn new(emit: F) -> Self {
        Self { emit }
    }
}

impl<T, F> EmitterSource<T> for FnSource<F>
where
    F: Fn(&mut dyn FnMut(T, usize), &CancelToken) -> usize,
{
    fn emit(&self, observer: &mut dyn FnMut(T, usize), cancel: &CancelToken) -> usize {
        (self.emit)(observer, cancel)
    }
}

impl<F> fmt::Debug for FnSource<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSource").finish_non_exhaustive()
    }
}
