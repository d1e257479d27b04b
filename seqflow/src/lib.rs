// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lazy, composable queries over in-memory and generator-backed sequences.
//!
//! A [`Sequence`] wraps an [`EmitterSource`]: something that can push its
//! values, one at a time, to an observer while honoring a [`CancelToken`].
//! Operators never evaluate anything; each one returns a new `Sequence` whose
//! source wraps the previous one. A terminal consumer then drives a single
//! synchronous emission through the whole pipeline.
//!
//! # Architecture
//!
//! - **Emission** flows downstream: the terminal consumer calls `emit` on the
//!   outermost sequence, each stage calls `emit` on the one it wraps and
//!   forwards qualifying values to its own observer.
//! - **Cancellation** flows upstream: a stage that has seen enough
//!   ([`take`](Sequence::take), [`first_where`](Sequence::first_where),
//!   [`any_where`](Sequence::any_where), ...) signals a token it owns, linked to
//!   the token it was given, and the upstream loops stop before their next
//!   push. Cancellation is never an error.
//! - **Indexes** are per stage: every stage that changes cardinality numbers
//!   its own output from 0.
//! - **State** (seen keys, counters, accumulators) lives inside a single
//!   `emit` call, so evaluating the same sequence twice gives the same result.
//!
//! ## Operator Categories
//!
//! | Category | Operators |
//! |----------|-----------|
//! | Filtering | [`filter`](Sequence::filter), [`distinct`](Sequence::distinct), [`distinct_by`](Sequence::distinct_by), [`skip`](Sequence::skip), [`take`](Sequence::take) |
//! | Projection | [`map`](Sequence::map), [`chunk`](Sequence::chunk) |
//! | Combination | [`append`](Sequence::append), [`concat`](Sequence::concat), [`union`](Sequence::union), [`except`](Sequence::except), [`intersect`](Sequence::intersect) |
//! | Ordering | [`order`](Sequence::order), [`order_with`](Sequence::order_with), [`order_by`](Sequence::order_by), [`order_by_descending`](Sequence::order_by_descending) |
//! | Elements | [`first`](Sequence::first), [`last`](Sequence::last), [`element_at`](Sequence::element_at) and their `_where` / `_or_none` variants |
//! | Quantifiers | [`all`](Sequence::all), [`any`](Sequence::any), [`any_where`](Sequence::any_where), [`contains`](Sequence::contains) |
//! | Aggregation | [`aggregate`](Sequence::aggregate), [`count`](Sequence::count), [`sum`](Sequence::sum), [`average`](Sequence::average), [`min`](Sequence::min), [`max`](Sequence::max) |
//! | Materialization | [`to_vec`](Sequence::to_vec), [`to_set`](Sequence::to_set), [`to_map`](Sequence::to_map), [`for_each`](Sequence::for_each), iteration |
//!
//! # Example
//!
//! ```
//! use seqflow::prelude::*;
//!
//! let items = ["apples", "bananas", "cherries", "dates", "eggs", "figs"];
//! let query = items
//!     .as_slice()
//!     .into_sequence()
//!     .filter(|s| s.len() > 4)
//!     .map(str::to_uppercase)
//!     .take(2);
//!
//! assert_eq!(query.to_vec(), vec!["APPLES", "BANANAS"]);
//! ```
//!
//! # Errors
//!
//! Usage errors are reported through [`SequenceError`]: `EmptySequence` from
//! `first`/`last`/`min`/`max`/`average`, `InvalidArgument` from the signed
//! `try_*` entry points and `chunk(0)`, `DuplicateKey` from `to_map` and
//! `IndexOutOfRange` from `element_at`.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
mod logging;

pub mod aggregate;
pub mod append;
pub mod chunk;
pub mod concat;
pub mod distinct;
pub mod element;
pub mod except;
pub mod filter;
pub mod intersect;
pub mod into_sequence;
pub mod map;
pub mod materialize;
pub mod order;
pub mod prelude;
pub mod quantifier;
pub mod sequence;
pub mod skip;
pub mod take;
pub mod union;

pub use into_sequence::{as_sequence, IntoSequence};
pub use sequence::Sequence;

pub use seqflow_core::{
    CancelToken, CancelTokenSource, EmitterSource, Reduced, Result, SequenceError,
};
