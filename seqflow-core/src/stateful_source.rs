// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Stateful transform wrapper.
//!
//! [`StatefulSource`] threads an explicit state value through a per-element
//! reducer. The state is cloned from the initial value at the start of every
//! emission and dropped at its end, so the wrapper itself stays immutable and
//! repeatable.

use crate::logging::debug;
use crate::{CancelToken, CancelTokenSource, EmitterSource};
use std::fmt;
use std::marker::PhantomData;

/// Outcome of one reducer step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reduced<OUT, S> {
    /// Value to push downstream, or `None` to suppress this step
    pub emit: Option<OUT>,
    /// State for the next step
    pub state: S,
    /// Stop the upstream walk after this step
    pub cancel: bool,
}

impl<OUT, S> Reduced<OUT, S> {
    /// Push `value` and continue.
    pub const fn emit(value: OUT, state: S) -> Self {
        Self {
            emit: Some(value),
            state,
            cancel: false,
        }
    }

    /// Push nothing and continue.
    pub const fn suppress(state: S) -> Self {
        Self {
            emit: None,
            state,
            cancel: false,
        }
    }

    /// Also request that the upstream stop producing values.
    #[must_use]
    pub fn cancel_when(mut self, cancel: bool) -> Self {
        self.cancel = cancel;
        self
    }
}

/// Wraps an emitter with a reducer that carries state across pushes.
///
/// For each upstream value the reducer returns a [`Reduced`]:
///
/// - `emit: Some(v)` pushes `v` with this wrapper's own running index;
/// - `state` replaces the running state whether or not anything was pushed;
/// - `cancel: true` signals a token owned by this emission and linked to the
///   caller's token. Only the upstream observes it: the caller's token stays
///   clear and the emission simply ends when the upstream loop returns.
///
/// # Example
///
/// ```
/// use seqflow_core::{ArraySource, CancelToken, EmitterSource, Reduced, StatefulSource};
///
/// // Running total, stop once it reaches 6.
/// let source = ArraySource::<_, i32>::new(vec![1, 2, 3, 4]);
/// let totals = StatefulSource::<_, _, _, i32>::new(source, 0, |v: i32, sum: i32| {
///     let sum = sum + v;
///     Reduced::emit(sum, sum).cancel_when(sum >= 6)
/// });
///
/// let mut seen = Vec::new();
/// totals.emit(&mut |v, _| seen.push(v), &CancelToken::NEVER);
/// assert_eq!(seen, vec![1, 3, 6]);
/// ```
pub struct StatefulSource<Src, S, R, IN> {
    source: Src,
    initial: S,
    reducer: R,
    _marker: PhantomData<fn(IN)>,
}

impl<Src, S, R, IN> StatefulSource<Src, S, R, IN> {
    pub const fn new(source: Src, initial: S, reducer: R) -> Self {
        Self {
            source,
            initial,
            reducer,
            _marker: PhantomData,
        }
    }
}

impl<Src, S, R, IN, OUT> EmitterSource<OUT> for StatefulSource<Src, S, R, IN>
where
    Src: EmitterSource<IN>,
    S: Clone,
    R: Fn(IN, S) -> Reduced<OUT, S>,
{
    fn emit(&self, observer: &mut dyn FnMut(OUT, usize), cancel: &CancelToken) -> usize {
        let linked = CancelTokenSource::linked(cancel);
        let mut state = Some(self.initial.clone());
        let mut count = 0;

        self.source.emit(
            &mut |value, _| {
                let Some(current) = state.take() else {
                    return;
                };
                let reduced = (self.reducer)(value, current);
                if let Some(out) = reduced.emit {
                    observer(out, count);
                    count += 1;
                }
                if reduced.cancel && !linked.is_cancelled_locally() {
                    debug!("seqflow: stateful stage stopped upstream after {} values", count);
                    linked.cancel();
                }
                state = Some(reduced.state);
            },
            &linked.token(),
        );

        count
    }
}

impl<Src, S, R, IN> fmt::Debug for StatefulSource<Src, S, R, IN>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatefulSource")
            .field("initial", &self.initial)
            .finish_non_exhaustive()
    }
}
