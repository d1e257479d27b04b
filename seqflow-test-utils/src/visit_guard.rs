// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sources that record or restrict how far an emission walks.

use seqflow::Sequence;
use seqflow_core::{CancelToken, EmitterSource};
use std::cell::Cell;
use std::rc::Rc;

/// Shared handle reporting how many values a [`VisitGuard`] pushed, summed
/// over every emission.
#[derive(Clone, Debug, Default)]
pub struct VisitCounter {
    visited: Rc<Cell<usize>>,
}

impl VisitCounter {
    pub fn visited(&self) -> usize {
        self.visited.get()
    }

    pub fn reset(&self) {
        self.visited.set(0);
    }

    fn record(&self) {
        self.visited.set(self.visited.get() + 1);
    }
}

/// Array-backed source that panics when asked to push past `max_index`.
///
/// Used to prove that short-circuiting consumers never visit values beyond
/// the point where the answer is known.
#[derive(Debug)]
pub struct VisitGuard<T> {
    items: Vec<T>,
    max_index: Option<usize>,
    counter: VisitCounter,
}

impl<T: Clone> VisitGuard<T> {
    /// Guard that panics when index `max_index + 1` would be pushed.
    pub fn new(items: Vec<T>, max_index: usize) -> Self {
        Self {
            items,
            max_index: Some(max_index),
            counter: VisitCounter::default(),
        }
    }

    /// Guard that never panics, only counts.
    pub fn unbounded(items: Vec<T>) -> Self {
        Self {
            items,
            max_index: None,
            counter: VisitCounter::default(),
        }
    }

    pub fn counter(&self) -> VisitCounter {
        self.counter.clone()
    }
}

impl<T: Clone> EmitterSource<T> for VisitGuard<T> {
    fn emit(&self, observer: &mut dyn FnMut(T, usize), cancel: &CancelToken) -> usize {
        let mut count = 0;
        for (index, item) in self.items.iter().enumerate() {
            if cancel.is_signaled() {
                break;
            }
            if let Some(max) = self.max_index {
                assert!(index <= max, "visited index {index}, beyond the allowed {max}");
            }
            self.counter.record();
            observer(item.clone(), index);
            count += 1;
        }
        count
    }
}

/// Sequence over `items` that panics if an emission visits past `max_index`.
pub fn guarded_sequence<T: Clone + 'static>(items: Vec<T>, max_index: usize) -> Sequence<'static, T> {
    Sequence::from_source(VisitGuard::new(items, max_index))
}

/// Sequence over `items` together with a counter of pushed values.
///
/// The source reports no known length, so `count()` has to walk it.
pub fn counted_sequence<T: Clone + 'static>(items: Vec<T>) -> (Sequence<'static, T>, VisitCounter) {
    let guard = VisitGuard::unbounded(items);
    let counter = guard.counter();
    (Sequence::from_source(guard), counter)
}

/// Sequence over `items` whose source never reads the cancellation token.
///
/// Every emission pushes all of `items`, so consumers that stop early must
/// still produce the same answer as with a well-behaved source.
pub fn ignoring_sequence<T: Clone + 'static>(items: Vec<T>) -> Sequence<'static, T> {
    Sequence::from_fn(move |observer, _cancel| {
        for (index, item) in items.iter().enumerate() {
            observer(item.clone(), index);
        }
        items.len()
    })
}
