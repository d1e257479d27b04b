// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{CancelToken, EmitterSource};

/// Emitter that never pushes anything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmptySource;

impl<T> EmitterSource<T> for EmptySource {
    fn emit(&self, _observer: &mut dyn FnMut(T, usize), _cancel: &CancelToken) -> usize {
        0
    }

    fn known_len(&self) -> Option<usize> {
        Some(0)
    }
}
