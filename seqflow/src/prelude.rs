// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the commonly used types.
//!
//! ```
//! use seqflow::prelude::*;
//!
//! let squares = as_sequence(vec![1, 2, 3]).map(|n| n * n);
//! assert_eq!(squares.sum(), 14);
//! ```

pub use crate::into_sequence::{as_sequence, IntoSequence};
pub use crate::sequence::Sequence;
pub use seqflow_core::{CancelToken, CancelTokenSource, EmitterSource, Result, SequenceError};
