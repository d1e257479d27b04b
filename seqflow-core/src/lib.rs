// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core evaluation engine for seqflow.
//!
//! An [`EmitterSource`] pushes the values of a conceptual sequence, one at a
//! time, to an observer callback while watching a [`CancelToken`]. Every lazy
//! operator in the `seqflow` crate is a new source wrapping an older one; the
//! pipeline runs only when a terminal consumer calls `emit`.
//!
//! # Sources
//!
//! - [`ArraySource`] - repeatable, over an in-memory collection
//! - [`IteratorSource`] - single traversal, over a one-shot iterator
//! - [`EmptySource`] - pushes nothing
//! - [`FnSource`] - delegates to a closure; used by derived operators
//! - [`StatefulSource`] - reducer with explicit state, used by distinct/skip/take
//!
//! # Cancellation
//!
//! Cancellation is cooperative and flows upstream: a stage that wants to stop
//! creates a [`CancelTokenSource`] linked to the token it was given and hands
//! the linked token to the source it wraps.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
mod logging;

pub mod array_source;
pub mod cancel_token;
pub mod emitter_source;
pub mod empty_source;
pub mod error;
pub mod fn_source;
pub mod iterator_source;
pub mod stateful_source;

pub use self::array_source::ArraySource;
pub use self::cancel_token::{CancelToken, CancelTokenSource};
pub use self::emitter_source::EmitterSource;
pub use self::empty_source::EmptySource;
pub use self::error::{non_negative, Result, SequenceError};
pub use self::fn_source::FnSource;
pub use self::iterator_source::IteratorSource;
pub use self::stateful_source::{Reduced, StatefulSource};
