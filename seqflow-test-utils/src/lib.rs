// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for seqflow.
//!
//! This crate provides fixture data, assertion helpers and instrumented
//! sources for testing sequence operators. It is meant for development and
//! testing only.
//!
//! # Key Types
//!
//! - [`VisitGuard`] - array-backed source that panics when an emission walks
//!   past a given index; proves that short-circuiting really short-circuits
//! - [`VisitCounter`] - shared count of values a guard pushed
//! - [`ignoring_sequence`] - source that never reads the cancellation token
//! - [`TestData`] - `Person` / `Animal` fixtures with canned instances
//!
//! # Example
//!
//! ```rust
//! use seqflow_test_utils::{assert_emits, guarded_sequence};
//!
//! // Panics if anything past index 3 is visited.
//! let guarded = guarded_sequence(vec![1, 2, 3, 4, 5], 3);
//! assert_eq!(guarded.first_where(|n| *n > 3), Ok(4));
//!
//! let evens = guarded_sequence(vec![1, 2, 3, 4], 3).filter(|n| n % 2 == 0);
//! assert_emits(&evens, &[2, 4]);
//! ```
//!
//! # Module Organization
//!
//! - `test_data` - `Person` / `Animal` records and canned instances
//! - `helpers` - assertion and collection functions
//! - `visit_guard` - instrumented sources

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod helpers;
pub mod test_data;
pub mod visit_guard;

pub use helpers::{assert_emits, assert_emits_nothing, collect_indexed};
pub use test_data::TestData;
pub use visit_guard::{
    counted_sequence, guarded_sequence, ignoring_sequence, VisitCounter, VisitGuard,
};
