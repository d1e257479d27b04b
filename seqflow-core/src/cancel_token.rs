// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cooperative cancellation for emissions.
//!
//! A [`CancelToken`] is the read side: emitter sources observe it before every
//! push. A [`CancelTokenSource`] is the write side: it owns the flag and can
//! signal it. Sources may be linked to a parent token, in which case the token
//! they hand out reports `parent || local`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug)]
struct Inner {
    signaled: AtomicBool,
    parent: Option<CancelToken>,
}

impl Inner {
    fn is_signaled(&self) -> bool {
        // Acquire ordering to see all writes that happened before cancel()
        self.signaled.load(Ordering::Acquire)
            || self.parent.as_ref().is_some_and(CancelToken::is_signaled)
    }
}

/// Observable cancellation signal passed down an emission.
///
/// Cloning a token yields another handle to the same signal. The
/// [`CancelToken::NEVER`] handle has no backing state and is never signaled.
///
/// # Example
///
/// ```
/// use seqflow_core::{CancelToken, CancelTokenSource};
///
/// let source = CancelTokenSource::new();
/// let token = source.token();
/// assert!(!token.is_signaled());
///
/// source.cancel();
/// assert!(token.is_signaled());
/// assert!(!CancelToken::NEVER.is_signaled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    inner: Option<Arc<Inner>>,
}

impl CancelToken {
    /// A token that is never signaled. Terminal consumers that must run to
    /// completion pass this one.
    pub const NEVER: CancelToken = CancelToken { inner: None };

    /// Returns whether cancellation has been requested on this token or on any
    /// token it is linked to.
    pub fn is_signaled(&self) -> bool {
        self.inner.as_ref().is_some_and(|inner| inner.is_signaled())
    }

    /// Returns `true` for handles that can never become signaled.
    pub fn is_never(&self) -> bool {
        self.inner.is_none()
    }
}

/// Owner of a cancellation flag.
///
/// Each evaluation that needs to stop its upstream creates its own source,
/// usually linked to the token it was handed so that an enclosing
/// cancellation still reaches the inner stage.
#[derive(Debug)]
pub struct CancelTokenSource {
    inner: Arc<Inner>,
}

impl CancelTokenSource {
    /// Create an unlinked source. The flag is initially clear.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                signaled: AtomicBool::new(false),
                parent: None,
            }),
        }
    }

    /// Create a source whose token also reports the `parent` signal.
    ///
    /// Linking to [`CancelToken::NEVER`] is equivalent to [`CancelTokenSource::new`].
    pub fn linked(parent: &CancelToken) -> Self {
        let parent = (!parent.is_never()).then(|| parent.clone());
        Self {
            inner: Arc::new(Inner {
                signaled: AtomicBool::new(false),
                parent,
            }),
        }
    }

    /// Set the local flag. Idempotent and permanent.
    pub fn cancel(&self) {
        self.inner.signaled.store(true, Ordering::Release);
    }

    /// Returns whether this source or its parent is signaled.
    pub fn is_signaled(&self) -> bool {
        self.inner.is_signaled()
    }

    /// Returns `true` if [`cancel`](Self::cancel) was called on this source,
    /// ignoring the parent.
    pub fn is_cancelled_locally(&self) -> bool {
        self.inner.signaled.load(Ordering::Acquire)
    }

    /// Read handle observing this source.
    pub fn token(&self) -> CancelToken {
        CancelToken {
            inner: Some(Arc::clone(&self.inner)),
        }
    }
}

impl Default for CancelTokenSource {
    fn default() -> Self {
        Self::new()
    }
}
