// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::logging::warn;
use crate::{CancelToken, EmitterSource};
use std::cell::{Cell, RefCell};
use std::fmt;

/// Single-traversal emitter over a one-shot iterator.
///
/// Unlike [`ArraySource`](crate::ArraySource), this source is stateful: each
/// [`emit`](EmitterSource::emit) resumes pulling from wherever the previous one
/// stopped. A cancelled emission can therefore be resumed, but once the
/// iterator is drained every later emission pushes nothing and logs a warning.
///
/// The token is checked before each pull, so cancellation never consumes a
/// value that is then dropped.
pub struct IteratorSource<I> {
    iter: RefCell<I>,
    drained: Cell<bool>,
}

impl<I> IteratorSource<I>
where
    I: Iterator,
{
    pub fn new<II>(iter: II) -> Self
    where
        II: IntoIterator<IntoIter = I>,
    {
        Self {
            iter: RefCell::new(iter.into_iter()),
            drained: Cell::new(false),
        }
    }

    /// Returns `true` once a traversal has reached the end of the iterator.
    pub fn is_drained(&self) -> bool {
        self.drained.get()
    }

    fn pull(&self) -> Option<I::Item> {
        // Borrow only for the pull so that the observer never runs while the
        // iterator is borrowed.
        let next = self.iter.borrow_mut().next();
        if next.is_none() {
            self.drained.set(true);
        }
        next
    }
}

impl<I> EmitterSource<I::Item> for IteratorSource<I>
where
    I: Iterator,
{
    fn emit(&self, observer: &mut dyn FnMut(I::Item, usize), cancel: &CancelToken) -> usize {
        if self.drained.get() {
            warn!("seqflow: re-evaluating an exhausted single-traversal iterator source");
            return 0;
        }

        let mut count = 0;
        while !cancel.is_signaled() {
            let Some(value) = self.pull() else {
                break;
            };
            observer(value, count);
            count += 1;
        }
        count
    }
}

impl<I> fmt::Debug for IteratorSource<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IteratorSource")
            .field("drained", &self.drained.get())
            .finish_non_exhaustive()
    }
}
